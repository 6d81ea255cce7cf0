use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use logbridge_kernel::settings::Settings;
use logbridge_kernel::{source_location, Extra, LogCategory, LogEvent, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "logbridge", version, about = "Emit log events through the logbridge facade")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log one event through the configured sink and crash reporter
    Log(LogArgs),
    /// Print the resolved settings as JSON
    Config,
}

#[derive(Debug, Args)]
struct LogArgs {
    /// Message text
    message: String,

    #[arg(short, long, default_value = "info")]
    level: LogLevel,

    #[arg(short, long, default_value = "setup")]
    category: LogCategory,

    /// Extra context as key=value; may be repeated
    #[arg(short, long = "extra", value_parser = Extra::parse_pair)]
    extra: Vec<(String, String)>,

    #[arg(short, long)]
    description: Option<String>,

    /// Override the configured usage-data consent; a bare flag means true
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    send_usage_data: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings =
        Settings::load().with_context(|| "failed to load logbridge settings")?;

    match cli.command {
        Command::Log(args) => run_log(&mut settings, args),
        Command::Config => {
            let rendered = serde_json::to_string_pretty(&settings.redacted())
                .with_context(|| "failed to render settings")?;
            println!("{rendered}");
            Ok(())
        }
    }
}

fn run_log(settings: &mut Settings, args: LogArgs) -> anyhow::Result<()> {
    if let Some(send_usage_data) = args.send_usage_data {
        settings.telemetry.send_usage_data = send_usage_data;
    }

    let backends = logbridge_app::start(settings)?;

    let mut event = LogEvent::new(args.message, args.level, args.category)
        .with_extras(args.extra.into_iter().collect())
        .at(source_location!());
    if let Some(description) = args.description {
        event = event.with_description(description);
    }
    backends.logger.log(event);

    for report in backends.crash_reporter.drain_reports() {
        let rendered =
            serde_json::to_string(&report).with_context(|| "failed to render crash report")?;
        println!("{rendered}");
    }

    Ok(())
}
