//! Default values for configuration entries.

pub fn date_input() -> String {
    "%d/%m/%Y".into()
}

pub fn date_output() -> String {
    "%A, %d. %B %Y".into()
}

pub fn markdown_extensions() -> Vec<String> {
    vec!["codehilite".into(), "extra".into()]
}
