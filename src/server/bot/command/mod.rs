//! Prefix commands.
//!
//! A command is a message starting with `gs.` or `gs ` (any case) followed by a
//! command name and its arguments, e.g. `gs.v frost dragon` or `GS petlist 2`.
//! Every command answers with a single embed.

pub mod calculator;
pub mod pet;
pub mod weight;

use serenity::all::CreateEmbed;

use crate::server::{error::command::CommandError, service::catalog::PetCatalog};

pub const PREFIXES: [&str; 2] = ["gs.", "gs "];

pub const PET_VALUE_USAGE: &str = "Usage: `gs.v <pet name>`";
pub const PET_LIST_USAGE: &str = "Usage: `gs.petlist [page]`";
pub const PET_WEIGHT_USAGE: &str = "Usage: `gs.petweight <age> <weight> [target_age]`";
pub const CALCULATE_USAGE: &str = "Usage: `gs.calc <expression>`";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PetValue {
        query: String,
    },
    PetList {
        /// 1-based
        page: usize,
    },
    PetWeight {
        age: i64,
        weight: f64,
        target_age: Option<i64>,
    },
    Calculate {
        expression: String,
    },
}

fn strip_prefix(content: &str) -> Option<&str> {
    PREFIXES.iter().find_map(|prefix| {
        content
            .get(..prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| &content[prefix.len()..])
    })
}

fn usage(line: &str) -> CommandError {
    CommandError::Usage(line.to_string())
}

impl Command {
    /// Parses a message into a command.
    ///
    /// # Returns
    /// - `Ok(Some(Command))` - Known command with valid arguments
    /// - `Ok(None)` - No prefix or unknown command name
    /// - `Err(CommandError::Usage)` - Known command with missing or malformed arguments
    pub fn parse(content: &str) -> Result<Option<Self>, CommandError> {
        let Some(rest) = strip_prefix(content.trim_start()) else {
            return Ok(None);
        };

        let rest = rest.trim();
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "petvalue" | "v" | "value" | "val" => {
                if args.is_empty() {
                    return Err(usage(PET_VALUE_USAGE));
                }
                Self::PetValue {
                    query: args.to_string(),
                }
            }
            "petlist" | "pets" | "list" => {
                let page = match args {
                    "" => 1,
                    page => page.parse().map_err(|_| usage(PET_LIST_USAGE))?,
                };
                Self::PetList { page }
            }
            "petweight" => Self::parse_weight(args)?,
            "c" | "calc" | "calculator" => {
                if args.is_empty() {
                    return Err(usage(CALCULATE_USAGE));
                }
                Self::Calculate {
                    expression: args.to_string(),
                }
            }
            _ => return Ok(None),
        };

        Ok(Some(command))
    }

    fn parse_weight(args: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = args.split_whitespace().collect();
        let (age, weight, target) = match parts.as_slice() {
            [age, weight] => (age, weight, None),
            [age, weight, target] => (age, weight, Some(target)),
            _ => return Err(usage(PET_WEIGHT_USAGE)),
        };

        Ok(Self::PetWeight {
            age: age.parse().map_err(|_| usage(PET_WEIGHT_USAGE))?,
            weight: weight.parse().map_err(|_| usage(PET_WEIGHT_USAGE))?,
            target_age: target
                .map(|target| target.parse())
                .transpose()
                .map_err(|_| usage(PET_WEIGHT_USAGE))?,
        })
    }
}

/// Runs a command and renders its reply.
pub async fn execute(command: Command, catalog: &PetCatalog) -> CreateEmbed {
    match command {
        Command::PetValue { query } => match catalog.resolve(&query).await {
            Ok((resolution, examples)) => pet::value_embed(&query, resolution, &examples),
            Err(e) => {
                tracing::debug!("Rejected pet value query {:?}: {}", query, e);
                pet::invalid_query_embed()
            }
        },
        Command::PetList { page } => {
            let snapshot = catalog.read().await;
            pet::list_embed(&snapshot, page)
        }
        Command::PetWeight {
            age,
            weight,
            target_age,
        } => weight::weight_embed(age, weight, target_age),
        Command::Calculate { expression } => calculator::calculate_embed(&expression),
    }
}
