//! CLI application for controlling Hue lights through a bridge.
//!
//! This example demonstrates a command-line interface playing the role of
//! the UI layer: pairing, listing lights, and switching them all on or off.
//!
//! Run with: cargo run --example hue_cli -- --help

use clap::{Parser, Subcommand};
use std::net::Ipv4Addr;
use std::str::FromStr;
use hue_bridge_rs::{Alert, Bridge, Brightness, Mirek, PairingOutcome, StateUpdate, SwitchReport};

#[derive(Parser)]
#[command(name = "hue-cli")]
#[command(about = "Control Philips Hue lights from the command line", long_about = None)]
struct Cli {
    /// IP address of the Hue bridge
    #[arg(short, long, global = true)]
    ip: Option<Ipv4Addr>,

    /// Credential issued by a previous pairing (not needed for pair)
    #[arg(short, long, global = true)]
    username: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register this application with the bridge
    Pair {
        /// Application identifier to register (defaults to the library's)
        #[arg(short, long)]
        devicetype: Option<String>,
    },

    /// List the lights the bridge knows about
    Lights,

    /// Turn all lights on
    On,

    /// Turn all lights off
    Off,

    /// Get the current status of one light
    Status {
        /// Light identifier as listed by the bridge
        id: String,
    },

    /// Set attributes on one light
    Set {
        /// Light identifier as listed by the bridge
        id: String,

        /// Turn the light on (conflicts with --off)
        #[arg(long, conflicts_with = "off")]
        on: bool,

        /// Turn the light off
        #[arg(long)]
        off: bool,

        /// Brightness (1-254)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=254))]
        brightness: Option<u8>,

        /// Color temperature in mired (153-500)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(153..=500))]
        ct: Option<u16>,
    },

    /// Run an alert effect on one light (none, select, lselect)
    Alert {
        /// Light identifier as listed by the bridge
        id: String,
        /// Alert mode
        alert: String,
    },
}

fn print_report(report: &SwitchReport) {
    if report.is_empty() {
        println!("No lights known to the bridge.");
        return;
    }
    if report.all_succeeded() {
        println!("{} light(s) updated", report.len());
    } else {
        for outcome in report.failures() {
            eprintln!(
                "light {} failed: {}",
                outcome.id,
                outcome.error.as_ref().map(ToString::to_string).unwrap_or_default()
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let ip = cli.ip.ok_or("Bridge IP address is required. Use --ip <IP>")?;

    match cli.command {
        Commands::Pair { devicetype } => {
            let mut bridge = Bridge::new(ip, devicetype.as_deref());
            println!("Pairing with bridge at {}...", ip);

            match bridge.pair().await {
                Ok(PairingOutcome::Paired { username }) => {
                    println!("Connected");
                    println!("Username: {}", username);
                    println!("Pass it to later invocations with --username");
                }
                Ok(PairingOutcome::LinkButtonNotPressed) => {
                    println!("Please press the button on the Hue bridge, then pair again");
                }
                Err(e) => eprintln!("Error during pairing: {}", e),
            }
        }

        _ => {
            // All other commands require a previously issued credential
            let username = cli
                .username
                .ok_or("Credential is required for this command. Use --username <USERNAME>")?;
            let mut bridge = Bridge::new(ip, None);
            bridge.set_credential(&username);

            match cli.command {
                Commands::Pair { .. } => unreachable!(),

                Commands::Lights => match bridge.get_lights().await {
                    Ok(registry) => {
                        if registry.is_empty() {
                            println!("No lights known to the bridge.");
                        } else {
                            println!("Found {} light(s):", registry.len());
                            for (id, info) in &registry {
                                println!(
                                    "  {:>3}  {:25} {} ({})",
                                    id,
                                    info.name,
                                    if info.state.on { "ON" } else { "OFF" },
                                    info.light_type,
                                );
                            }
                        }
                    }
                    Err(e) => eprintln!("Error listing lights: {}", e),
                },

                Commands::On => {
                    println!("Turning all lights ON...");
                    match bridge.set_all_lights(true).await {
                        Ok(report) => print_report(&report),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }

                Commands::Off => {
                    println!("Turning all lights OFF...");
                    match bridge.set_all_lights(false).await {
                        Ok(report) => print_report(&report),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }

                Commands::Status { id } => match bridge.get_light(&id).await {
                    Ok(info) => {
                        println!("\n{} ({})", info.name, info.light_type);
                        println!("  Power: {}", if info.state.on { "ON" } else { "OFF" });
                        println!("  Reachable: {}", info.state.reachable);

                        if let Some(bri) = info.state.bri {
                            println!("  Brightness: {}", bri);
                        }
                        if let Some(ct) = info.state.ct {
                            println!("  Temperature: {} mired", ct);
                        }
                        if let (Some(hue), Some(sat)) = (info.state.hue, info.state.sat) {
                            println!("  Color: hue {} sat {}", hue, sat);
                        }
                        if let Some(mode) = info.state.colormode {
                            println!("  Color mode: {}", mode);
                        }
                    }
                    Err(e) => eprintln!("Error getting status: {}", e),
                },

                Commands::Set {
                    id,
                    on,
                    off,
                    brightness,
                    ct,
                } => {
                    let mut update = StateUpdate::new();
                    if on {
                        update.power(true);
                    }
                    if off {
                        update.power(false);
                    }
                    if let Some(level) = brightness {
                        if let Some(bri) = Brightness::create(level) {
                            update.brightness(&bri);
                        }
                    }
                    if let Some(mired) = ct {
                        if let Some(mirek) = Mirek::create(mired) {
                            update.color_temperature(&mirek);
                        }
                    }

                    match bridge.set_light(&id, &update).await {
                        Ok(()) => println!("Light {} updated", id),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }

                Commands::Alert { id, alert } => match Alert::from_str(&alert) {
                    Ok(alert) => {
                        let mut update = StateUpdate::new();
                        update.alert(alert);
                        match bridge.set_light(&id, &update).await {
                            Ok(()) => println!("Alert running on light {}", id),
                            Err(e) => eprintln!("Error: {}", e),
                        }
                    }
                    Err(_) => {
                        eprintln!("Unknown alert mode. Use one of: none, select, lselect.");
                    }
                },
            }
        }
    }

    Ok(())
}
