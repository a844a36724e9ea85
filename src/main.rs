#[macro_use]
extern crate log;

use avl_tree::AvlTree;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::env;
use std::io::{self, BufRead};

const LOG_LEVEL_VAR: &str = "AVL_LOG";

fn log_level() -> LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn run_command(tree: &mut AvlTree<String>, args: &[&str]) -> io::Result<bool> {
    match args {
        ["insert", key] => {
            if !tree.insert(key.to_string()) {
                println!("{} already exists", key);
            }
        },
        ["remove", key] => {
            if !tree.remove(&key.to_string()) {
                println!("{} does not exist", key);
            }
        },
        ["find", key] => println!("{}", tree.contains(&key.to_string())),
        ["path", key] => println!("{}", tree.trace_path(&key.to_string())),
        ["count"] => println!("{}", tree.num_nodes()),
        ["height"] => println!("{}", tree.height()),
        ["print"] => tree.print_tree()?,
        ["clear"] => tree.clear(),
        ["quit"] => return Ok(false),
        [] => {},
        _ => eprintln!("invalid command: {}", args.join(" ")),
    }
    Ok(true)
}

fn main() -> io::Result<()> {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("failed to initialize logger: {}", err);
    }

    let mut tree = AvlTree::new();
    let input = io::stdin();

    for line in input.lock().lines() {
        let line = line?;
        let args: Vec<&str> = line.split_whitespace().collect();
        if !run_command(&mut tree, &args)? {
            break;
        }
    }

    info!("exiting with {} keys", tree.num_nodes());
    Ok(())
}
