use smallvec::SmallVec;

use std::collections::HashMap;

pub type StationId = usize;

pub type NameMap<Ref> = HashMap<Ref, StationId>;

/// Station connections, kept sorted by station name once the network is built.
pub type Neighbors = SmallVec<[StationId; 4]>;

#[derive(Debug)]
pub struct Network {
    pub stations: Vec<Station>,
    pub connections: Vec<Neighbors>,
    pub names: NameMap<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub coordinates: Option<(u64, u64)>,
}

/// Tracks are undirected, so both travel directions share one key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackKey(StationId, StationId);

impl TrackKey {
    pub fn new(a: StationId, b: StationId) -> TrackKey {
        if a <= b { TrackKey(a, b) } else { TrackKey(b, a) }
    }
}

impl Network {
    pub fn new() -> Network {
        Network {
            stations: Vec::new(),
            connections: Vec::new(),
            names: HashMap::new(),
        }
    }

    pub fn add_station(&mut self, station: Station) -> StationId {
        let id = self.stations.len();
        self.names.insert(station.name.clone(), id);
        self.stations.push(station);
        self.connections.push(SmallVec::new());
        id
    }

    pub fn connect(&mut self, a: StationId, b: StationId) {
        self.connections[a].push(b);
        self.connections[b].push(a);
    }

    pub fn has_station(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.names.get(name).cloned()
    }

    pub fn name(&self, id: StationId) -> &str {
        &self.stations[id].name
    }

    pub fn is_connected(&self, a: StationId, b: StationId) -> bool {
        self.connections[a].contains(&b)
    }

    pub fn neighbors(&self, id: StationId) -> &[StationId] {
        &self.connections[id]
    }

    /// Orders every neighbor list by station name, giving route search a
    /// reproducible traversal order.
    pub fn sort_connections(&mut self) {
        let stations = &self.stations;
        for neighbors in self.connections.iter_mut() {
            neighbors.sort_by(|a, b| stations[*a].name.cmp(&stations[*b].name));
        }
    }

    pub fn num_tracks(&self) -> usize {
        self.connections.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}

impl Default for Network {
    fn default() -> Network { Network::new() }
}

#[test]
fn test_track_key_is_undirected() {
    assert_eq!(TrackKey::new(3, 1), TrackKey::new(1, 3));
    assert!(TrackKey::new(1, 2) != TrackKey::new(1, 3));
}

#[test]
fn test_sorted_neighbors() {
    let mut net = Network::new();
    let hub = net.add_station(Station { name: "m".to_string(), coordinates: None });
    let z = net.add_station(Station { name: "z".to_string(), coordinates: None });
    let a = net.add_station(Station { name: "a".to_string(), coordinates: None });
    let k = net.add_station(Station { name: "k".to_string(), coordinates: None });
    net.connect(hub, z);
    net.connect(hub, a);
    net.connect(hub, k);
    net.sort_connections();
    assert_eq!(net.neighbors(hub), &[a, k, z]);
    assert_eq!(net.num_tracks(), 3);
    assert!(net.has_station("k"));
    assert!(!net.has_station("q"));
}
