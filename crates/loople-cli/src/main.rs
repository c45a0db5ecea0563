use std::io::Read;

use clap::{Parser, Subcommand};
use loople_mentions::{Segment, mentioned_handles, segments};
use loople_tenant::resolve_subdomain;

#[derive(Parser)]
#[command(name = "loople")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a post body into text and mention segments.
    Segment {
        /// Body text; read from stdin when omitted.
        text: Option<String>,

        /// Emit segments as JSON records.
        #[arg(long)]
        json: bool,
    },
    /// List the distinct handles mentioned in a post body.
    Mentions {
        /// Body text; read from stdin when omitted.
        text: Option<String>,
    },
    /// Resolve the tenant slug from a Host header value.
    Tenant {
        host: String,

        #[arg(long, default_value = "loople.app")]
        base_domain: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Segment { text, json } => {
            let body = body_or_stdin(text)?;
            if json {
                let all: Vec<Segment<'_>> = segments(&body).collect();
                println!("{}", serde_json::to_string(&all)?);
            } else {
                for segment in segments(&body) {
                    match segment {
                        Segment::Text(text) => println!("text    {text:?}"),
                        Segment::Mention(handle) => println!("mention @{handle}"),
                    }
                }
            }
        }
        Command::Mentions { text } => {
            let body = body_or_stdin(text)?;
            for handle in mentioned_handles(&body) {
                println!("{handle}");
            }
        }
        Command::Tenant { host, base_domain } => {
            let slug = resolve_subdomain(&host, &base_domain)?;
            println!("{slug}");
        }
    }

    Ok(())
}

fn body_or_stdin(text: Option<String>) -> Result<String, std::io::Error> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
