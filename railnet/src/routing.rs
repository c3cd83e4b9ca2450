//! Shortest route enumeration.

use crate::input::network::{Network, StationId};
use std::collections::VecDeque;
use log::debug;

/// Stations from start to end, in travel order.
pub type Route = Vec<StationId>;

type PathId = usize;

struct PathRecord {
    station: StationId,
    parent: Option<PathId>,
    length: usize,
}

/// Partial paths of the breadth-first search. Each record only stores its
/// last station and a back-reference to the path it extends.
struct PathArena {
    records: Vec<PathRecord>,
}

impl PathArena {
    fn new() -> Self {
        PathArena { records: Vec::new() }
    }

    fn root(&mut self, station: StationId) -> PathId {
        self.push(PathRecord { station, parent: None, length: 0 })
    }

    fn extend(&mut self, parent: PathId, station: StationId) -> PathId {
        let length = self.records[parent].length + 1;
        self.push(PathRecord { station, parent: Some(parent), length })
    }

    fn push(&mut self, record: PathRecord) -> PathId {
        let id = self.records.len();
        self.records.push(record);
        id
    }

    fn stations(&self, path: PathId) -> impl Iterator<Item = StationId> + '_ {
        let mut next = Some(path);
        std::iter::from_fn(move || {
            let id = next?;
            next = self.records[id].parent;
            Some(self.records[id].station)
        })
    }

    fn visits(&self, path: PathId, station: StationId) -> bool {
        self.stations(path).any(|s| s == station)
    }

    fn route(&self, path: PathId) -> Route {
        let mut route = self.stations(path).collect::<Vec<_>>();
        route.reverse();
        route
    }
}

/// All simple paths of minimum length from `start` to `end`.
///
/// Neighbors are visited in the network's sorted order, so the returned
/// routes come out in the same order on every run. An empty result means
/// the stations are not connected.
pub fn shortest_paths(network: &Network, start: StationId, end: StationId) -> Vec<Route> {
    let mut arena = PathArena::new();
    let mut queue = VecDeque::new();
    let mut routes = Vec::new();
    let mut min_length = None;

    queue.push_back(arena.root(start));
    while let Some(path) = queue.pop_front() {
        let (station, length) = (arena.records[path].station, arena.records[path].length);

        if station == end {
            match min_length {
                None => {
                    min_length = Some(length);
                    routes.push(arena.route(path));
                },
                Some(l) if l == length => routes.push(arena.route(path)),
                _ => {},
            }
            continue;
        }

        if let Some(l) = min_length {
            if length >= l { continue; }
        }

        for &next in network.neighbors(station) {
            if arena.visits(path, next) { continue; }
            let extended = arena.extend(path, next);
            queue.push_back(extended);
        }
    }

    debug!("Found {} shortest route(s) of length {:?} from {} to {}.",
           routes.len(), min_length, network.name(start), network.name(end));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::network_parser::parse_network;
    use maplit::hashset;
    use std::collections::HashSet;

    fn names(net: &Network, routes: &[Route]) -> Vec<Vec<String>> {
        routes.iter()
            .map(|r| r.iter().map(|s| net.name(*s).to_string()).collect())
            .collect()
    }

    fn routes_between(input: &str, start: &str, end: &str) -> Vec<Vec<String>> {
        let net = parse_network(input).unwrap();
        let routes = shortest_paths(&net, net.station_id(start).unwrap(),
                                    net.station_id(end).unwrap());
        names(&net, &routes)
    }

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diamond() {
        let routes = routes_between("stations:\na\nb\nc\nd\nconnections:\na-b\na-c\nb-d\nc-d\n",
                                    "a", "d");
        let found = routes.into_iter().collect::<HashSet<_>>();
        assert_eq!(found, hashset!{ strs(&["a", "b", "d"]), strs(&["a", "c", "d"]) });
    }

    #[test]
    fn test_route_order_follows_names() {
        // connection order in the file should not matter
        let routes = routes_between("stations:\na\nb\nc\nd\nconnections:\nd-c\na-d\nb-c\na-b\n",
                                    "a", "c");
        assert_eq!(routes, vec![strs(&["a", "b", "c"]), strs(&["a", "d", "c"])]);
    }

    #[test]
    fn test_longer_paths_discarded() {
        let input = "stations:\na\nb\nc\nd\ne\nconnections:\na-b\nb-e\na-c\nc-d\nd-e\n";
        assert_eq!(routes_between(input, "a", "e"), vec![strs(&["a", "b", "e"])]);
    }

    #[test]
    fn test_direct_connection() {
        let input = "stations:\na\nb\nc\nconnections:\na-b\nb-c\na-c\n";
        assert_eq!(routes_between(input, "a", "c"), vec![strs(&["a", "c"])]);
    }

    #[test]
    fn test_disconnected() {
        let input = "stations:\na\nb\nc\nd\nconnections:\na-b\nc-d\n";
        assert!(routes_between(input, "a", "d").is_empty());
    }

    #[test]
    fn test_all_ties_kept() {
        // two layers of three stations, fully connected between layers
        let input = "stations:\ns\nx1\nx2\nx3\ny1\ny2\nt\nconnections:\n\
                     s-x1\ns-x2\ns-x3\nx1-y1\nx1-y2\nx2-y1\nx2-y2\nx3-y1\nx3-y2\ny1-t\ny2-t\n";
        let routes = routes_between(input, "s", "t");
        assert_eq!(routes.len(), 6);
        assert!(routes.iter().all(|r| r.len() == 4));
        assert_eq!(routes[0], strs(&["s", "x1", "y1", "t"]));
        assert_eq!(routes[5], strs(&["s", "x3", "y2", "t"]));
    }

    #[test]
    fn test_routes_are_simple_and_connected() {
        let input = "stations:\na\nb\nc\nd\ne\nf\nconnections:\n\
                     a-b\nb-c\nc-a\nc-d\nd-e\ne-c\nb-f\nf-e\n";
        let net = parse_network(input).unwrap();
        let (a, e) = (net.station_id("a").unwrap(), net.station_id("e").unwrap());
        let routes = shortest_paths(&net, a, e);
        assert!(!routes.is_empty());
        for route in &routes {
            assert_eq!(route[0], a);
            assert_eq!(*route.last().unwrap(), e);
            assert_eq!(route.iter().collect::<HashSet<_>>().len(), route.len());
            for w in route.windows(2) {
                assert!(net.is_connected(w[0], w[1]));
            }
        }
        assert_eq!(names(&net, &routes), vec![strs(&["a", "c", "e"])]);
    }
}
