use super::network::{Network, StationId};

#[derive(Debug, Fail, PartialEq)]
pub enum ArgumentError {
    #[fail(display = "number of trains is not a valid positive integer.")]
    InvalidTrainCount(String),
    #[fail(display = "start and end station are the same.")]
    SameStation,
    #[fail(display = "start station does not exist.")]
    UnknownStart(String),
    #[fail(display = "end station does not exist.")]
    UnknownEnd(String),
}

pub fn parse_train_count(s: &str) -> Result<usize, ArgumentError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgumentError::InvalidTrainCount(s.to_string())),
    }
}

/// Resolves the start and end station names against the network.
pub fn endpoints(network: &Network, start: &str, end: &str)
    -> Result<(StationId, StationId), ArgumentError> {
    if start == end {
        return Err(ArgumentError::SameStation);
    }
    let start_id = network.station_id(start)
        .ok_or_else(|| ArgumentError::UnknownStart(start.to_string()))?;
    let end_id = network.station_id(end)
        .ok_or_else(|| ArgumentError::UnknownEnd(end.to_string()))?;
    Ok((start_id, end_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::network_parser::parse_network;

    #[test]
    fn test_train_count() {
        assert_eq!(parse_train_count("4"), Ok(4));
        assert_eq!(parse_train_count("0"), Err(ArgumentError::InvalidTrainCount("0".to_string())));
        assert_eq!(parse_train_count("-3"), Err(ArgumentError::InvalidTrainCount("-3".to_string())));
        assert_eq!(parse_train_count("two"), Err(ArgumentError::InvalidTrainCount("two".to_string())));
        assert_eq!(parse_train_count("1.5"), Err(ArgumentError::InvalidTrainCount("1.5".to_string())));
        assert_eq!(parse_train_count(" 3"), Err(ArgumentError::InvalidTrainCount(" 3".to_string())));
        assert_eq!(parse_train_count("3 "), Err(ArgumentError::InvalidTrainCount("3 ".to_string())));
    }

    #[test]
    fn test_endpoints() {
        let net = parse_network("stations:\na\nb\nconnections:\na-b\n").unwrap();
        assert_eq!(endpoints(&net, "a", "b"), Ok((0, 1)));
        assert_eq!(endpoints(&net, "a", "a"), Err(ArgumentError::SameStation));
        // the same-station check comes before existence checks
        assert_eq!(endpoints(&net, "q", "q"), Err(ArgumentError::SameStation));
        assert_eq!(endpoints(&net, "q", "b"), Err(ArgumentError::UnknownStart("q".to_string())));
        assert_eq!(endpoints(&net, "a", "q"), Err(ArgumentError::UnknownEnd("q".to_string())));
    }
}
