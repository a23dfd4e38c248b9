use std::marker::PhantomData;
use tracing::{info, debug, error, Span};

pub trait PhaseSpan {
    fn name(&self) -> &'static str;
    fn span(&self) -> Span;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseSpan;
    fn root_span() -> Span;
}

pub struct LogCtx<O: OpMarker> {
    pub(crate) json: bool,
    pub(crate) _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    pub(crate) fn op_name(&self) -> &'static str { O::NAME }

    /// Root span of the op; the fields are logged once at debug level.
    pub fn root_span_kv<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        self.started(None, fields);
        O::root_span()
    }

    pub fn span(&self, ph: &O::Phase) -> Span { ph.span() }

    pub fn span_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        self.started(Some(ph.name()), fields);
        ph.span()
    }

    fn started<'a, T>(&self, phase: Option<&'static str>, fields: T)
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(fields);
        match phase {
            Some(phase) => debug!(op = %self.op_name(), phase, details = %details, "span_start"),
            None => debug!(op = %self.op_name(), details = %details, "start"),
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.json { info!(op = %self.op_name(), "{}", msg.as_ref()); } else { info!("{}", msg.as_ref()); }
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        debug!(op = %self.op_name(), "{}", msg.as_ref());
    }

    pub fn info_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        if self.json { info!(op = %self.op_name(), details = %kv_to_string(kv), "{}", msg); }
        else { info!("{}", msg); }
    }

    // Text mode keeps the details inline; failures are read by humans.
    pub fn error_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = kv_to_string(kv);
        if self.json { error!(op = %self.op_name(), details = %details, "{}", msg); }
        else { error!("{} ({})", msg, details); }
    }
}

fn kv_to_string<'a, T>(kv: T) -> String
where
    T: IntoIterator<Item = (&'a str, String)>,
{
    kv.into_iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join(" ")
}
