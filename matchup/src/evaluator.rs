//! Pairwise evaluation of an own team against an opponent team

use matchdex_chart::{ChartError, TypeChart};
use matchdex_records::{Combatant, MoveRecord, MoveSource};
use serde::Serialize;

use crate::normalize::{MinMax, display_scale};
use crate::ranking::{OpponentRanking, RankedCounter, ScoreBreakdown, top_counters};
use crate::survival::{SurvivalInput, survival_estimate};
use crate::{
    EvaluatorConfig, MatchupError, MoveEstimate, ResolvedMove, best_move, estimate_damage,
    resolve_move, utility_score,
};

/// Everything computed for one (own, opponent) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairEvaluation {
    pub own: String,
    pub opponent: String,
    /// Positions in the input slices
    pub own_index: usize,
    pub opponent_index: usize,
    /// Own best move against the opponent
    pub outgoing: Option<MoveEstimate>,
    /// Opponent's best move against us
    pub incoming: Option<MoveEstimate>,
    pub breakdown: ScoreBreakdown,
    pub raw_score: f64,
    /// 0-100, scaled over the whole run
    pub score: f64,
}

impl PairEvaluation {
    pub fn outgoing_damage(&self) -> f64 {
        self.outgoing.as_ref().map_or(0.0, |e| e.expected)
    }

    pub fn incoming_damage(&self) -> f64 {
        self.incoming.as_ref().map_or(0.0, |e| e.expected)
    }
}

/// A pair left out of scoring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPair {
    pub own: String,
    pub opponent: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub pairs: Vec<PairEvaluation>,
    /// One entry per opponent, in input order
    pub rankings: Vec<OpponentRanking>,
    pub skipped: Vec<SkippedPair>,
}

impl EvaluationReport {
    pub fn pair(&self, own: &str, opponent: &str) -> Option<&PairEvaluation> {
        self.pairs
            .iter()
            .find(|p| p.own == own && p.opponent == opponent)
    }

    pub fn ranking(&self, opponent: &str) -> Option<&OpponentRanking> {
        self.rankings.iter().find(|r| r.opponent == opponent)
    }
}

/// A combatant with its moves resolved once for the run
struct Prepared<'c> {
    combatant: &'c Combatant,
    moves: Vec<ResolvedMove>,
    utility: f64,
}

/// Unscored pair: best moves in both directions
struct Duel {
    own: usize,
    opponent: usize,
    outgoing: Option<MoveEstimate>,
    incoming: Option<MoveEstimate>,
}

pub struct Evaluator<'a> {
    chart: &'a TypeChart,
    config: EvaluatorConfig,
    moves_db: Option<&'a dyn MoveSource>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator. Fails if the chart is missing any entry.
    pub fn new(chart: &'a TypeChart, config: EvaluatorConfig) -> Result<Self, MatchupError> {
        if !chart.is_complete() {
            return Err(MatchupError::EmptyChart);
        }
        Ok(Self {
            chart,
            config,
            moves_db: None,
        })
    }

    /// Use `source` to fill in categories and types missing from move records
    pub fn with_move_source(mut self, source: &'a dyn MoveSource) -> Self {
        self.moves_db = Some(source);
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn chart(&self) -> &TypeChart {
        self.chart
    }

    pub fn resolve_move(&self, attacker: &Combatant, record: &MoveRecord) -> ResolvedMove {
        resolve_move(record, &attacker.stats, &self.config, self.moves_db)
    }

    /// Estimate one move of `attacker` against `defender`
    pub fn estimate_damage(
        &self,
        attacker: &Combatant,
        record: &MoveRecord,
        defender: &Combatant,
    ) -> Result<MoveEstimate, MatchupError> {
        let resolved = self.resolve_move(attacker, record);
        Ok(estimate_damage(self.chart, attacker, &resolved, defender)?)
    }

    /// Best move of `attacker` against `defender`; `None` if it knows no moves
    pub fn best_move(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
    ) -> Result<Option<MoveEstimate>, MatchupError> {
        let resolved: Vec<ResolvedMove> = attacker
            .moves
            .iter()
            .map(|m| self.resolve_move(attacker, m))
            .collect();
        self.best_resolved(attacker, &resolved, defender)
    }

    fn best_resolved(
        &self,
        attacker: &Combatant,
        moves: &[ResolvedMove],
        defender: &Combatant,
    ) -> Result<Option<MoveEstimate>, MatchupError> {
        if moves.is_empty() && !(1..=2).contains(&defender.types.len()) {
            return Err(ChartError::InvalidCardinality(defender.types.len()).into());
        }
        let estimates = moves
            .iter()
            .map(|m| estimate_damage(self.chart, attacker, m, defender))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(best_move(estimates))
    }

    fn prepare<'c>(&self, combatants: &'c [Combatant]) -> Vec<Prepared<'c>> {
        combatants
            .iter()
            .map(|combatant| {
                let moves: Vec<ResolvedMove> = combatant
                    .moves
                    .iter()
                    .map(|m| self.resolve_move(combatant, m))
                    .collect();
                let utility = utility_score(&moves, &self.config);
                Prepared {
                    combatant,
                    moves,
                    utility,
                }
            })
            .collect()
    }

    fn duel(
        &self,
        own: &Prepared<'_>,
        opponent: &Prepared<'_>,
        indices: (usize, usize),
    ) -> Result<Duel, MatchupError> {
        Ok(Duel {
            own: indices.0,
            opponent: indices.1,
            outgoing: self.best_resolved(own.combatant, &own.moves, opponent.combatant)?,
            incoming: self.best_resolved(opponent.combatant, &opponent.moves, own.combatant)?,
        })
    }

    /// Score every own combatant against every opponent and rank counters.
    ///
    /// A pair whose type sets cannot be looked up is reported in
    /// [`EvaluationReport::skipped`] and does not affect the other pairs.
    pub fn evaluate(&self, own: &[Combatant], opponents: &[Combatant]) -> EvaluationReport {
        let own_prepared = self.prepare(own);
        let opponent_prepared = self.prepare(opponents);

        let mut report = EvaluationReport::default();
        let mut duels = Vec::new();
        for (i, own_side) in own_prepared.iter().enumerate() {
            for (j, opponent_side) in opponent_prepared.iter().enumerate() {
                match self.duel(own_side, opponent_side, (i, j)) {
                    Ok(duel) => duels.push(duel),
                    Err(err) => {
                        tracing::warn!(
                            own = %own_side.combatant.name,
                            opponent = %opponent_side.combatant.name,
                            error = %err,
                            "Skipping pair"
                        );
                        report.skipped.push(SkippedPair {
                            own: own_side.combatant.name.clone(),
                            opponent: opponent_side.combatant.name.clone(),
                            reason: err.to_string(),
                        });
                    }
                }
            }
        }

        let expected = |e: &Option<MoveEstimate>| e.as_ref().map_or(0.0, |e| e.expected);
        let damage_bounds = MinMax::from_values(
            duels
                .iter()
                .flat_map(|d| [expected(&d.outgoing), expected(&d.incoming)]),
        );
        let normalize = |v: f64| damage_bounds.map_or(0.0, |b| b.scale(v));

        let exposure: Vec<f64> = (0..own_prepared.len())
            .map(|i| {
                let incoming: Vec<f64> = duels
                    .iter()
                    .filter(|d| d.own == i)
                    .map(|d| normalize(expected(&d.incoming)))
                    .collect();
                if incoming.is_empty() {
                    0.0
                } else {
                    incoming.iter().sum::<f64>() / incoming.len() as f64
                }
            })
            .collect();

        let weights = &self.config.weights;
        let mut pairs: Vec<PairEvaluation> = duels
            .into_iter()
            .map(|duel| {
                let own_side = &own_prepared[duel.own];
                let opponent_side = &opponent_prepared[duel.opponent];
                let survival = survival_estimate(
                    &SurvivalInput {
                        own_speed: own_side.combatant.stats.speed,
                        opponent_speed: opponent_side.combatant.stats.speed,
                        outgoing: expected(&duel.outgoing),
                        opponent_hp: opponent_side.combatant.stats.hp,
                        incoming: expected(&duel.incoming),
                        own_hp: own_side.combatant.stats.hp,
                    },
                    self.config.assume_first_strike,
                );
                let breakdown = ScoreBreakdown {
                    damage: normalize(expected(&duel.outgoing)),
                    survival,
                    utility: own_side.utility,
                    exposure: exposure[duel.own],
                };
                PairEvaluation {
                    own: own_side.combatant.name.clone(),
                    opponent: opponent_side.combatant.name.clone(),
                    own_index: duel.own,
                    opponent_index: duel.opponent,
                    raw_score: breakdown.raw_score(weights),
                    breakdown,
                    outgoing: duel.outgoing,
                    incoming: duel.incoming,
                    score: 0.0,
                }
            })
            .collect();

        let raw_scores: Vec<f64> = pairs.iter().map(|p| p.raw_score).collect();
        for (pair, score) in pairs.iter_mut().zip(display_scale(&raw_scores)) {
            pair.score = score;
        }

        report.rankings = opponent_prepared
            .iter()
            .enumerate()
            .map(|(j, opponent_side)| {
                let candidates = pairs
                    .iter()
                    .filter(|p| p.opponent_index == j)
                    .map(|p| self.counter_entry(p))
                    .collect();
                OpponentRanking {
                    opponent: opponent_side.combatant.name.clone(),
                    counters: top_counters(candidates, self.config.top_n),
                }
            })
            .collect();
        report.pairs = pairs;

        tracing::debug!(
            pairs = report.pairs.len(),
            skipped = report.skipped.len(),
            "Evaluation finished"
        );
        report
    }

    fn counter_entry(&self, pair: &PairEvaluation) -> RankedCounter {
        let exposure = pair.breakdown.exposure;
        RankedCounter {
            own: pair.own.clone(),
            score: pair.score,
            reasons: pair.breakdown.top_reasons(&self.config.weights),
            best_own_move: pair.outgoing.as_ref().map(|e| e.move_name.clone()),
            best_opponent_move: pair.incoming.as_ref().map(|e| e.move_name.clone()),
            exposure,
            exposure_warning: exposure >= self.config.exposure_warning,
            breakdown: pair.breakdown,
        }
    }
}
