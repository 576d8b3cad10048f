use crate::cities::models::City;
use crate::geo::consts::AT_TARGET;
use crate::geo::directions::Compass;
use crate::geo::{self, bearing_deg, distance_km};
use models::{ClosenessTier, GuessRow};

pub mod consts;
pub mod models;

pub fn score_guess(guess: &City, target: &City, compass: &Compass) -> GuessRow {
    let distance = distance_km(guess.position(), target.position());
    let percentage = geo::closeness_percentage(distance);
    let distance_label = format!("{distance:.2} km");
    let is_target = guess.same_as(target);
    let direction = if is_target {
        AT_TARGET
    } else {
        compass.direction(bearing_deg(guess.position(), target.position()))
    };
    let summary = if is_target {
        direction.label.to_string()
    } else {
        format!("The target city is {distance_label} to the {}", direction.label)
    };
    GuessRow {
        name: guess.name.clone(),
        distance_km: distance,
        distance_label,
        percentage,
        emoji: direction.emoji,
        direction: direction.label,
        tier: ClosenessTier::for_percentage(percentage),
        is_target,
        summary,
    }
}

pub fn score_guesses(guesses: &[City], target: &City, compass: &Compass) -> Vec<GuessRow> {
    guesses
        .iter()
        .map(|guess| score_guess(guess, target, compass))
        .collect()
}
