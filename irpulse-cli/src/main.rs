use clap::{Parser, Subcommand};
use irpulse_lib::PulseTrain;
use irpulse_lib::constants::NIKAI_BITS;
use irpulse_lib::nikai::{decode_nikai, send_nikai};
use std::error::Error;
use tracing::debug;

#[derive(Parser)]
#[command(name = "irpulse", about = "Encode and decode Nikai IR pulse trains")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a data word into a raw pulse train
    Encode {
        /// Data word, decimal or 0x-prefixed hex
        value: String,

        /// Number of significant bits, MSB first
        #[arg(long, default_value_t = NIKAI_BITS)]
        bits: u16,

        /// Extra times to repeat the frame
        #[arg(long, default_value_t = 0)]
        repeat: u16,

        /// Print the pulse train as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a captured pulse train
    Decode {
        /// Comma-separated mark/space durations in microseconds, mark first
        durations: String,

        /// Expected number of data bits
        #[arg(long, default_value_t = NIKAI_BITS)]
        bits: u16,

        /// Entry in the buffer where the frame starts
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Require the canonical bit count before matching
        #[arg(long)]
        strict: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_word(s: &str) -> Result<u64, std::num::ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        s.parse()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            value,
            bits,
            repeat,
            json,
        } => {
            let value = parse_word(&value)?;
            debug!(value, bits, repeat, "encoding frame");

            let mut train = PulseTrain::new();
            send_nikai(&mut train, value, bits, repeat)?;

            if json {
                println!("{}", serde_json::to_string(&train.durations)?);
            } else {
                println!("Carrier: {} kHz, {}% duty", train.freq_khz, train.duty);
                let rendered: Vec<String> = train.durations.iter().map(u32::to_string).collect();
                println!("{}", rendered.join(","));
            }
        }
        Command::Decode {
            durations,
            bits,
            offset,
            strict,
            json,
        } => {
            let rawbuf: Vec<u32> = durations
                .split(',')
                .map(|s| s.trim().parse())
                .collect::<Result<_, _>>()?;
            debug!(entries = rawbuf.len(), bits, offset, strict, "decoding capture");

            let result = decode_nikai(&rawbuf, offset, bits, strict)?;

            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{result}");
                println!("  address: 0x{:X}", result.address);
                println!("  command: 0x{:X}", result.command);
            }
        }
    }
    Ok(())
}
