use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    /// `--json` wins; otherwise `VACANCY_OUTPUT_FORMAT=json` selects JSON.
    pub fn from_env(json_flag: bool) -> Self {
        let format = match (json_flag, env::var("VACANCY_OUTPUT_FORMAT").ok().as_deref()) {
            (true, _) | (false, Some("json")) => OutputFormat::Json,
            _ => OutputFormat::Table,
        };
        let pretty = match env::var("VACANCY_OUTPUT_PRETTY").ok().as_deref() {
            Some(v) if v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") => true,
            _ => false,
        };
        OutputConfig { format, pretty }
    }
}
