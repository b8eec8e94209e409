use anyhow::Result;
use dynamic_array_list::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let list = cli.build_list()?;

    println!("size: {}", list.size());
    println!("capacity: {}", list.capacity());
    println!("values: {:?}", list);

    Ok(())
}
