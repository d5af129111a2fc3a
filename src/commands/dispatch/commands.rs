//! Command implementations for all graphkit commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use graphkit_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Path {
                file,
                from,
                to,
                algorithm,
            } => {
                let algorithm = algorithm.unwrap_or(ctx.config.algorithms.shortest_path);
                commands::path::execute(ctx, file, from, to, algorithm)
            }
            Commands::Paths {
                file,
                from,
                algorithm,
            } => {
                let algorithm = algorithm.unwrap_or(ctx.config.algorithms.shortest_path);
                commands::paths::execute(ctx, file, from, algorithm)
            }
            Commands::AllPairs { file, algorithm } => {
                let algorithm = algorithm.unwrap_or(ctx.config.algorithms.all_pairs);
                commands::all_pairs::execute(ctx, file, algorithm)
            }
            Commands::Mst { file, from } => commands::mst::execute(ctx, file, from),
            Commands::Cycle { file } => commands::cycle::execute(ctx, file),
            Commands::Topo { file } => commands::topo::execute(ctx, file),
            Commands::Verify { file } => commands::verify::execute(ctx, file),
        };
        ctx.finish();
        result
    }
}
