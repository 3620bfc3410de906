use anyhow::Result;
use clap::Parser;
use dashctl_core::to_json;
use dashctl_dashlist::DashListOption;
use serde::Serialize;

#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct OptionInfo {
    name: &'static str,
    argument: &'static str,
}

pub fn run_options(args: OptionsArgs) -> Result<()> {
    if args.json {
        let infos: Vec<_> = DashListOption::CATALOG
            .iter()
            .map(|&(name, argument)| OptionInfo { name, argument })
            .collect();
        print!("{}", to_json(&infos, 2)?);
        return Ok(());
    }

    let width = DashListOption::CATALOG
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, argument) in DashListOption::CATALOG {
        println!("{:<width$}  {}", name, argument, width = width);
    }
    Ok(())
}
