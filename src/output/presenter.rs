use std::io::{self, Write};

use serde::Serialize;

use super::config::{OutputConfig, OutputFormat};
use super::table;
use super::types::Envelope;
use crate::collect::ProviderReport;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateView {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub estimate: Option<i64>,
}

pub trait Presenter {
    fn reports(&self, reports: &[ProviderReport], w: &mut dyn Write) -> io::Result<()>;
    fn estimate(&self, view: &EstimateView, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }

impl JsonPresenter {
    fn envelope<T: Serialize>(&self, op: &'static str, result: &T, w: &mut dyn Write) -> io::Result<()> {
        let env = Envelope::result(op, result).map_err(to_io)?;
        if self.pretty { serde_json::to_writer_pretty(&mut *w, &env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, &env).map_err(to_io)? }
        writeln!(w)
    }
}

impl Presenter for JsonPresenter {
    fn reports(&self, reports: &[ProviderReport], w: &mut dyn Write) -> io::Result<()> {
        self.envelope("collect", &reports, w)
    }

    fn estimate(&self, view: &EstimateView, w: &mut dyn Write) -> io::Result<()> {
        self.envelope("estimate", view, w)
    }
}

pub struct TablePresenter;

impl Presenter for TablePresenter {
    fn reports(&self, reports: &[ProviderReport], w: &mut dyn Write) -> io::Result<()> {
        for report in reports {
            write!(w, "{}", table::render(report))?;
        }
        Ok(())
    }

    fn estimate(&self, view: &EstimateView, w: &mut dyn Write) -> io::Result<()> {
        match view.estimate {
            Some(v) => writeln!(w, "{}", v),
            None => writeln!(w, "no estimate"),
        }
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_config(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Table => Box::new(TablePresenter),
        };
        Emitter { presenter }
    }

    pub fn emit_reports(&self, reports: &[ProviderReport]) -> io::Result<()> {
        let mut out = io::stdout();
        self.presenter.reports(reports, &mut out)?;
        out.flush()
    }

    pub fn emit_estimate(&self, view: &EstimateView) -> io::Result<()> {
        let mut out = io::stdout();
        self.presenter.estimate(view, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }
