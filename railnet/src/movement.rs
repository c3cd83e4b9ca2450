//! Turn-based train movement.
//!
//! Every train follows one fixed route and advances at most one station per
//! turn. Within a turn, trains are evaluated in ascending order and the lower
//! index wins any contested track or station. Intermediate stations hold at
//! most one train at the end of a turn; the end station has no limit.

use crate::input::network::{StationId, TrackKey};
use crate::routing::Route;
use std::collections::{BTreeMap, BTreeSet};
use log::*;

/// 1-based train number.
pub type TrainId = usize;

#[derive(Debug, Fail, PartialEq)]
#[fail(display = "no path between the start and end stations")]
pub struct NoRouteError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub train: TrainId,
    pub station: StationId,
}

/// Moves of one turn, in ascending train order.
pub type Turn = Vec<Move>;

#[derive(Debug, Default, PartialEq)]
pub struct Schedule {
    pub turns: Vec<Turn>,
    /// Trains that never reached the end station because no train could
    /// move any more.
    pub stranded: Vec<TrainId>,
}

#[derive(Debug, Copy, Clone)]
struct TrainState {
    route: usize,
    position: usize,
}

pub struct Simulation<'a> {
    routes: &'a [Route],
    end: StationId,
    trains: Vec<TrainState>,
    occupied: BTreeMap<StationId, TrainId>,
}

impl<'a> Simulation<'a> {
    /// Assigns the trains round-robin over `routes`.
    pub fn new(routes: &'a [Route], num_trains: usize) -> Result<Simulation<'a>, NoRouteError> {
        let end = routes.first().and_then(|r| r.last()).cloned().ok_or(NoRouteError)?;
        let trains = (0..num_trains)
            .map(|i| TrainState { route: i % routes.len(), position: 0 })
            .collect();
        Ok(Simulation {
            routes: routes,
            end: end,
            trains: trains,
            occupied: BTreeMap::new(),
        })
    }

    pub fn num_trains(&self) -> usize {
        self.trains.len()
    }

    pub fn route(&self, train: TrainId) -> &'a Route {
        let routes = self.routes;
        &routes[self.trains[train - 1].route]
    }

    pub fn location(&self, train: TrainId) -> StationId {
        self.route(train)[self.trains[train - 1].position]
    }

    pub fn has_arrived(&self, train: TrainId) -> bool {
        self.trains[train - 1].position + 1 >= self.route(train).len()
    }

    pub fn all_arrived(&self) -> bool {
        (1..=self.trains.len()).all(|t| self.has_arrived(t))
    }

    /// Which train holds each intermediate station after the last turn.
    pub fn occupied(&self) -> &BTreeMap<StationId, TrainId> {
        &self.occupied
    }

    /// Advances all trains by one turn and returns the moves made.
    pub fn step(&mut self) -> Turn {
        let routes = self.routes;
        let mut claims = BTreeMap::new();
        let mut tracks = BTreeSet::new();
        let mut departed = BTreeSet::new();
        let mut moves = Vec::new();

        for (idx, state) in self.trains.iter_mut().enumerate() {
            let train = idx + 1;
            let route = &routes[state.route];
            if state.position + 1 >= route.len() {
                continue;
            }
            let (current, next) = (route[state.position], route[state.position + 1]);

            if next != self.end {
                let resident = self.occupied.get(&next)
                    .map(|holder| !departed.contains(holder))
                    .unwrap_or(false);
                if resident || claims.contains_key(&next) {
                    trace!("T{} waits for station {}", train, next);
                    continue;
                }
            }

            let track = TrackKey::new(current, next);
            if tracks.contains(&track) {
                trace!("T{} waits for track {:?}", train, track);
                continue;
            }

            tracks.insert(track);
            departed.insert(train);
            if next != self.end {
                claims.insert(next, train);
            }
            state.position += 1;
            moves.push(Move { train, station: next });
        }

        // A train that stayed put keeps its station.
        for (idx, state) in self.trains.iter().enumerate() {
            let train = idx + 1;
            let route = &routes[state.route];
            if !departed.contains(&train) && state.position > 0 && state.position + 1 < route.len() {
                claims.insert(route[state.position], train);
            }
        }

        self.occupied = claims;
        moves
    }

    /// Runs until every train has arrived or a turn passes without any move.
    pub fn run(mut self) -> Schedule {
        let mut turns = Vec::new();
        while !self.all_arrived() {
            let moves = self.step();
            if moves.is_empty() {
                break;
            }
            debug!("Turn {}: {} train(s) moved.", turns.len() + 1, moves.len());
            turns.push(moves);
        }

        let stranded = (1..=self.trains.len())
            .filter(|t| !self.has_arrived(*t))
            .collect::<Vec<_>>();
        if !stranded.is_empty() {
            warn!("No train can move; halting after {} turns with trains {:?} not arrived.",
                  turns.len(), stranded);
        }
        info!("Schedule for {} train(s) takes {} turns.", self.trains.len(), turns.len());

        Schedule { turns, stranded }
    }
}

/// Moves `num_trains` trains along `routes` until they have all arrived.
pub fn simulate(routes: &[Route], num_trains: usize) -> Result<Schedule, NoRouteError> {
    Ok(Simulation::new(routes, num_trains)?.run())
}
