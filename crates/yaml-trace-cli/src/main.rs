use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yaml_trace::{replay, EventStream, LibyamlCursor, TraceWriter};

/// Print the parser events of a YAML stream in the YAML test suite format.
#[derive(clap::Parser, Debug)]
struct Args {
    #[clap(value_parser, default_value = "-")]
    input: clio::Input,
    #[clap(value_parser, default_value = "-")]
    output: clio::Output,
    /// Feed the events through the callback interface instead of pulling them.
    #[clap(long)]
    push: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yaml_trace=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = Args::parse();
    if let Err(err) = trace(&mut args.input, &mut args.output, args.push) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn trace(
    input: &mut dyn std::io::Read,
    output: &mut dyn std::io::Write,
    push: bool,
) -> Result<(), yaml_trace::Error> {
    let mut reader = std::io::BufReader::new(input);
    let mut parser = libyaml_safer::Parser::new();
    parser.set_input(&mut reader);
    let cursor = LibyamlCursor::new(parser);

    if push {
        let mut writer = TraceWriter::with_io_writer(&mut *output);
        replay(cursor, &mut writer)?;
    } else {
        EventStream::new(cursor).write_to_io(&mut *output)?;
    }
    output.flush()?;
    Ok(())
}
