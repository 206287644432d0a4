use crate::types::ActivityLine;

pub fn format(lines: &[ActivityLine]) -> String {
    let mut out = String::new();
    for line in lines {
        push_row(&mut out, line);
    }
    out
}

fn push_row(out: &mut String, line: &ActivityLine) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "- {}", line.summary);
}
