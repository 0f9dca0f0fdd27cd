use std::fmt::{self, Write};

/// A configuration shape that can describe itself as readable text.
pub trait Renderable {
    /// Writes the multi-line summary into `out`.
    fn render_to(&self, out: &mut dyn Write) -> fmt::Result;

    /// Like `render_to`, with keyed collections visited in ascending key
    /// order. Shapes without keyed collections render identically.
    fn render_sorted_to(&self, out: &mut dyn Write) -> fmt::Result {
        self.render_to(out)
    }

    fn render(&self) -> String {
        collect(|buf| self.render_to(buf))
    }

    fn render_sorted(&self) -> String {
        collect(|buf| self.render_sorted_to(buf))
    }
}

fn collect(f: impl FnOnce(&mut dyn Write) -> fmt::Result) -> String {
    let mut buf = String::new();
    // fmt::Write for String never fails
    let _ = f(&mut buf);
    buf
}

/// Top-level scalar lines followed by the `Sensors:` heading
pub(crate) fn write_general(
    out: &mut dyn Write,
    location: &str,
    log_level: &str,
    tag_data_with_hostname: bool,
) -> fmt::Result {
    writeln!(out, "location                 : {}", location)?;
    writeln!(out, "log-level                : {}", log_level)?;
    writeln!(out, "tag data with hostname   : {}", tag_data_with_hostname)?;
    writeln!(out, "Sensors:")
}

pub(crate) fn write_named_sensor(out: &mut dyn Write, name: &str, uuid: &str) -> fmt::Result {
    writeln!(out, "   sensor \"{}\" (UUID: \"{}\")", name, uuid)
}

pub(crate) fn write_keyed_sensor(out: &mut dyn Write, key: &str, uuid: &str) -> fmt::Result {
    writeln!(out, "   sensor \"{}\" (key: {})", uuid, key)
}

pub(crate) fn write_channel(
    out: &mut dyn Write,
    name: &str,
    address: i64,
    sample_freq: i64,
) -> fmt::Result {
    writeln!(out, "       channel \"{}\"", name)?;
    writeln!(out, "           address     : {}", address)?;
    writeln!(out, "           sample_freq : {}", sample_freq)
}
