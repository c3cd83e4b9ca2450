use super::network::{Network, Station};
use regex::Regex;
use log::debug;

#[derive(Debug, Fail, PartialEq)]
pub enum ParseError {
    #[fail(display = "error in regular expression: {}", _0)]
    RegexError(String),
    #[fail(display = "unexpected line outside of section at {}", line)]
    UnexpectedLine { line: usize },
    #[fail(display = "invalid station line at {}", line)]
    InvalidStationLine { line: usize },
    #[fail(display = "invalid station name: {}", _0)]
    InvalidStationName(String),
    #[fail(display = "duplicate station name: {}", _0)]
    DuplicateStation(String),
    #[fail(display = "invalid coordinates for station: {}", _0)]
    InvalidCoordinates(String),
    #[fail(display = "two stations at same coordinates: {} and {}", _0, _1)]
    DuplicateCoordinates(String, String),
    #[fail(display = "invalid connection line at {}", line)]
    InvalidConnectionLine { line: usize },
    #[fail(display = "connection from station to itself: {}", _0)]
    SelfConnection(String),
    #[fail(display = "connection references non-existent station: {}", _0)]
    UnknownStation(String),
    #[fail(display = "duplicate connection: {}-{}", _0, _1)]
    DuplicateConnection(String, String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Stations,
    Connections,
}

/// Parses the network map format
///
/// ```text
/// stations:
/// waterloo, 3, 1
/// victoria
///
/// connections:
/// waterloo-victoria   # trailing comment
/// ```
///
pub fn parse_network(input: &str) -> Result<Network, ParseError> {
    let name_re = Regex::new(r"^[a-z0-9_]+$")
        .map_err(|e| ParseError::RegexError(format!("{:?}", e)))?;

    let mut network = Network::new();
    let mut coordinates: Vec<((u64, u64), usize)> = Vec::new();
    let mut section = None;

    for (idx, line) in input.lines().enumerate() {
        let line_num = idx + 1;
        let line = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        }.trim();

        if line.is_empty() {
            continue;
        }
        if line == "stations:" {
            section = Some(Section::Stations);
            continue;
        }
        if line == "connections:" {
            section = Some(Section::Connections);
            continue;
        }

        match section {
            Some(Section::Stations) => {
                let parts = line.split(',').map(|p| p.trim()).collect::<Vec<_>>();
                if parts.len() != 1 && parts.len() != 3 {
                    return Err(ParseError::InvalidStationLine { line: line_num });
                }
                let name = parts[0];
                if !name_re.is_match(name) {
                    return Err(ParseError::InvalidStationName(name.to_string()));
                }
                if network.has_station(name) {
                    return Err(ParseError::DuplicateStation(name.to_string()));
                }

                let mut station = Station { name: name.to_string(), coordinates: None };
                if parts.len() == 3 {
                    let coord = parse_coordinates(parts[1], parts[2])
                        .ok_or_else(|| ParseError::InvalidCoordinates(name.to_string()))?;
                    if let Some(&(_, other)) = coordinates.iter().find(|(c, _)| *c == coord) {
                        return Err(ParseError::DuplicateCoordinates(
                            name.to_string(), network.name(other).to_string()));
                    }
                    coordinates.push((coord, network.stations.len()));
                    station.coordinates = Some(coord);
                }
                network.add_station(station);
            },
            Some(Section::Connections) => {
                let parts = line.split('-').map(|p| p.trim()).collect::<Vec<_>>();
                if parts.len() != 2 {
                    return Err(ParseError::InvalidConnectionLine { line: line_num });
                }
                let (a, b) = (parts[0], parts[1]);
                if a == b {
                    return Err(ParseError::SelfConnection(a.to_string()));
                }
                let a_id = network.station_id(a)
                    .ok_or_else(|| ParseError::UnknownStation(a.to_string()))?;
                let b_id = network.station_id(b)
                    .ok_or_else(|| ParseError::UnknownStation(b.to_string()))?;
                if network.is_connected(a_id, b_id) {
                    return Err(ParseError::DuplicateConnection(a.to_string(), b.to_string()));
                }
                network.connect(a_id, b_id);
            },
            None => return Err(ParseError::UnexpectedLine { line: line_num }),
        }
    }

    network.sort_connections();
    debug!("Parsed network with {} stations and {} connections.",
           network.stations.len(), network.num_tracks());
    Ok(network)
}

fn parse_coordinates(x: &str, y: &str) -> Option<(u64, u64)> {
    let x = x.parse::<i64>().ok()?;
    let y = y.parse::<i64>().ok()?;
    if x <= 0 || y <= 0 {
        return None;
    }
    Some((x as u64, y as u64))
}
