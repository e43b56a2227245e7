use clap::Args;

/// Logging options
#[derive(Clone, Args)]
pub struct LogOptions {
    /// Do not install a logger.
    #[arg(short, long)]
    quiet: bool,

    /// Profiling granularity.
    /// Setting any value restricts logs to profiling information
    #[arg(long)]
    profiling: Option<usize>,
}

impl LogOptions {
    /// Try set up the logger based on the verbosity level. Logs go to stderr
    /// so that stdout carries only the result line.
    pub fn try_setup_logger(&self) {
        use tracing_forest::{ForestLayer, Printer};
        use tracing_subscriber::{
            EnvFilter, Registry,
            filter::{LevelFilter, filter_fn},
            fmt,
            layer::SubscriberExt,
            util::SubscriberInitExt,
        };

        if self.quiet {
            return;
        }

        // default filter
        let default_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        // spans with level i contain the field "profiling_{i}"
        let profiling_level = self.profiling.unwrap_or(1);
        let filter_by_profiling_level = filter_fn(move |metadata| {
            (1..=profiling_level)
                .map(|i| format!("profiling_{i}"))
                .any(|field| metadata.fields().field(&field).is_some())
        });

        let fmt_layer = fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_thread_ids(false)
            .with_thread_names(false)
            .without_time();

        Registry::default()
            .with(
                self.profiling
                    .is_some()
                    .then(|| ForestLayer::from(Printer::new().writer(std::io::stderr))),
            )
            .with(fmt_layer)
            .with(
                self.profiling
                    .is_some()
                    .then_some(filter_by_profiling_level),
            )
            .with(self.profiling.is_none().then_some(default_filter))
            .try_init()
            .ok();
    }
}
