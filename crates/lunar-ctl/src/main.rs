//! lunar-ctl — command-line interface for the lunard link simulator.

mod cmd;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;

fn print_usage() {
    println!("Usage: lunar-ctl [--port <port>] <command>");
    println!();
    println!("Commands:");
    println!("  stats                     Show link statistics (default)");
    println!("  packets                   List the pending queue in transmission order");
    println!("  send <type> <data...>     Queue a packet (emergency | science | logs)");
    println!("  transmit                  Transmit every queued packet");
    println!("  history                   Show recent transmissions");
    println!("  clear                     Clear the pending queue");
    println!("  config                    Show link configuration");
    println!("  config set <key=value>... Change config (distance, bandwidth, compression, scale)");
    println!();
    println!("Options:");
    println!("  --port <port>   API port (default: {})", DEFAULT_PORT);
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Parse --port option
    let mut port = DEFAULT_PORT;
    let mut remaining: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--port" {
            i += 1;
            port = args
                .get(i)
                .context("--port requires a value")?
                .parse()
                .context("--port must be a number")?;
        } else {
            remaining.push(&args[i]);
        }
        i += 1;
    }

    let result = match remaining.as_slice() {
        ["stats"] | [] => cmd::stats::cmd_stats(port).await,
        ["packets"] => cmd::packets::cmd_packets(port).await,
        ["send", packet_type, data @ ..] if !data.is_empty() => {
            cmd::packets::cmd_send(port, packet_type, &data.join(" ")).await
        }
        ["transmit"] => cmd::packets::cmd_transmit(port).await,
        ["history"] => cmd::stats::cmd_history(port).await,
        ["clear"] => cmd::packets::cmd_clear(port).await,
        ["config"] => cmd::config::cmd_config(port).await,
        ["config", "set", assignments @ ..] => cmd::config::cmd_config_set(port, assignments).await,
        ["help"] | ["--help"] | ["-h"] => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
