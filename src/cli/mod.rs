use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use crate::list::{DEFAULT_CAPACITY, DynamicArrayList};

#[derive(Parser, Debug)]
#[command(name = "listctl")]
#[command(version, about = "Build, edit and sort a dynamic array list from the command line", long_about = None)]
pub struct Cli {
    /// Values appended to the list, in order
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Initial capacity of the backing store
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY as i64, allow_negative_numbers = true)]
    pub capacity: i64,

    /// Insert a value before sorting, given as INDEX=VALUE
    #[arg(short, long, value_name = "INDEX=VALUE", value_parser = parse_insertion)]
    pub insert: Option<(usize, i64)>,

    /// Remove the element at INDEX before sorting
    #[arg(short, long, value_name = "INDEX")]
    pub remove: Option<usize>,

    /// Sort in descending order
    #[arg(short, long)]
    pub descending: bool,

    /// Skip sorting
    #[arg(long, conflicts_with = "descending")]
    pub no_sort: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Builds the list from `values`, applies the insert and then the remove,
    /// and sorts unless `--no-sort` is set.
    pub fn build_list(&self) -> Result<DynamicArrayList<i64>> {
        let mut list = DynamicArrayList::try_with_capacity(self.capacity)
            .context("Failed to create list")?;
        list.extend(self.values.iter().copied());
        info!("built list of {} values", list.size());

        if let Some((index, value)) = self.insert {
            list.insert(index, value)
                .with_context(|| format!("Failed to insert {value} at index {index}"))?;
        }

        if let Some(index) = self.remove {
            let removed = list
                .remove(index)
                .with_context(|| format!("Failed to remove index {index}"))?;
            info!("removed {removed} from index {index}");
        }

        if !self.no_sort {
            if self.descending {
                list.sort_by(|a, b| b.cmp(a));
            } else {
                list.sort();
            }
        }

        Ok(list)
    }
}

fn parse_insertion(arg: &str) -> Result<(usize, i64), String> {
    let (index, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=VALUE, got `{arg}`"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid index `{index}`: {e}"))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value `{value}`: {e}"))?;
    Ok((index, value))
}
