use std::env;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::{IndicatifLayer, filter::IndicatifFilter};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::Directive,
    fmt::{
        self, FmtContext, FormatEvent,
        format::{self as fmt_format, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use bluetap_common::log::{COMMAND_TARGET, OUTPUT_TARGET, PRINT_TARGET, SUCCESS_TARGET};

pub struct BluetapFormatter;

impl<S, N> FormatEvent<S, N> for BluetapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> fmt_format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if let Some(symbol) = symbol_for(meta.target(), *meta.level()) {
            write!(writer, "{} ", symbol)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Line prefix for an event; `None` for lines printed verbatim.
fn symbol_for(target: &str, level: Level) -> Option<ColoredString> {
    match target {
        PRINT_TARGET | OUTPUT_TARGET => return None,
        SUCCESS_TARGET => return Some("[+]".green().bold()),
        COMMAND_TARGET => return Some("[C]".cyan().bold()),
        _ => {}
    }

    let symbol: ColoredString = match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[D]".blue(),
        Level::INFO => "[I]".green(),
        Level::WARN => "[!]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    };
    Some(symbol)
}

/// Builds the filter from `RUST_LOG` style directives.
///
/// Printer and command output lines stay enabled whatever the directives say.
fn env_filter(directives: &str) -> EnvFilter {
    let mut filter = EnvFilter::new(directives);
    for target in [PRINT_TARGET, OUTPUT_TARGET] {
        if let Ok(directive) = format!("{target}=info").parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Installs the global subscriber.
///
/// Log lines go through the indicatif writer so they are printed above any
/// active spinner. Only spans carrying `indicatif.pb_show` get a spinner.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "info".to_string());
    let filter = env_filter(&directives);

    let fmt_layer = fmt::layer()
        .event_format(BluetapFormatter)
        .with_writer(indicatif_layer.get_stderr_writer());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}
