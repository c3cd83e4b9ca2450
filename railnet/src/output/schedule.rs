use crate::input::network::Network;
use crate::movement::{Move, Schedule};
use std::io;

pub fn move_token(network: &Network, m: &Move) -> String {
    format!("T{}-{}", m.train, network.name(m.station))
}

/// One line per turn on the format `T1-b T2-d`.
pub fn turn_lines(network: &Network, schedule: &Schedule) -> Vec<String> {
    schedule.turns.iter()
        .map(|turn| turn.iter()
             .map(|m| move_token(network, m))
             .collect::<Vec<_>>()
             .join(" "))
        .collect()
}

pub fn write_schedule<W: io::Write>(network: &Network,
                                    schedule: &Schedule,
                                    f: &mut W)
                                    -> Result<(), failure::Error> {
    for line in turn_lines(network, schedule) {
        writeln!(f, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::network_parser::parse_network;

    #[test]
    fn test_turn_lines() {
        let net = parse_network("stations:\nleeds\nyork\nconnections:\nleeds-york\n").unwrap();
        let york = net.station_id("york").unwrap();
        let schedule = Schedule {
            turns: vec![
                vec![Move { train: 1, station: york }],
                vec![Move { train: 2, station: york }, Move { train: 10, station: york }],
            ],
            stranded: vec![],
        };
        assert_eq!(turn_lines(&net, &schedule), vec!["T1-york", "T2-york T10-york"]);

        let mut out = Vec::new();
        write_schedule(&net, &schedule, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "T1-york\nT2-york T10-york\n");
    }
}
