#[macro_use] extern crate failure_derive;

pub mod input;
pub mod output;
pub mod routing;
pub mod movement;


use std::path::Path;
use input::network::{Network, StationId};
use input::network_parser;
use movement::{NoRouteError, Schedule};
use log::*;

pub type AppResult<T> = Result<T, failure::Error>;

/// Finds the shortest routes from `start` to `end` and moves `num_trains`
/// trains along them.
pub fn find_train_movements(network: &Network,
                            start: StationId,
                            end: StationId,
                            num_trains: usize) -> Result<Schedule, NoRouteError> {
    let routes = routing::shortest_paths(network, start, end);
    if routes.is_empty() {
        return Err(NoRouteError);
    }
    for route in &routes {
        debug!("Route: {}", route.iter().map(|s| network.name(*s)).collect::<Vec<_>>().join(" -> "));
    }
    movement::simulate(&routes, num_trains)
}

pub fn read_file(f :&Path) -> AppResult<String> {
  use std::fs::File;
  use std::io::prelude::*;
  use std::io::BufReader;

  let file = File::open(f)
      .map_err(|_| failure::format_err!("could not open network map file"))?;
  let mut file = BufReader::new(&file);
  let mut contents = String::new();
  file.read_to_string(&mut contents)?;
  Ok(contents)
}

pub fn get_network(s :&Path) -> AppResult<Network> {
    let contents = read_file(s)?;
    get_network_string(&contents)
}

pub fn get_network_string(s :&str) -> AppResult<Network> {
    let network = network_parser::parse_network(s)?;
    info!("Network: {} stations, {} connections.", network.stations.len(), network.num_tracks());
    Ok(network)
}
