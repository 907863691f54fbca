use clap::Parser;
use env_logger::Env;
use log::info;
use xdp_hold::{lifecycle, rlimit, Args, HoldOutcome, Interface, XdpFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Default to info so the filter's per-packet debug output stays quiet
    // unless RUST_LOG asks for it; warnings and errors always pass.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Resolution has no side effects; a typo aborts before any privilege or
    // kernel resource is touched.
    let iface = Interface::resolve(&args.iface)?;
    let mode = args.attach_mode()?;

    rlimit::raise_memlock()?;

    let mut filter = XdpFilter::open(aya::include_bytes_aligned!(concat!(
        env!("OUT_DIR"),
        "/xdp-hold"
    )))?;
    filter.load()?;

    info!(
        "holding {mode} filter on {iface} for {}s, Ctrl-C to detach early",
        args.hold_secs
    );
    let outcome = lifecycle::run(&mut filter, &iface, mode, args.hold()).await?;
    match outcome {
        HoldOutcome::Elapsed => info!("hold interval elapsed, filter removed"),
        HoldOutcome::Interrupted => info!("interrupted, filter removed"),
    }

    Ok(())
}
