//! The simulation step loop.
//!
//! One step = one tick of the arrival clock: evolve the fundamental,
//! maybe admit one trader, let the market maker react to whatever flow
//! executed, drift the belief, and record the state of the market.

use exchange::Exchange;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use types::trade::Trade;

use crate::bots::{InformedTrader, MarketMaker, NoiseTrader};
use crate::config::SimulationConfig;
use crate::export::StepRecord;
use crate::fundamental::Fundamental;

/// A full session: exchange, agents, fundamental, and the clock.
pub struct Simulation {
    cfg: SimulationConfig,
    exchange: Exchange,
    market_maker: MarketMaker,
    informed: InformedTrader,
    noise: NoiseTrader,
    fundamental: Fundamental,
    rng: ChaCha8Rng,
}

impl Simulation {
    pub fn new(cfg: SimulationConfig) -> Self {
        let mut exchange = Exchange::new();
        let mm_gateway = exchange.register_trader();
        let informed_gateway = exchange.register_trader();
        let noise_gateway = exchange.register_trader();

        let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
        let start_high = rng.gen_bool(0.5);

        Self {
            market_maker: MarketMaker::new(mm_gateway, &cfg),
            informed: InformedTrader::new(informed_gateway, &cfg),
            noise: NoiseTrader::new(noise_gateway, &cfg, cfg.seed.wrapping_add(1)),
            fundamental: Fundamental::new(&cfg, start_high),
            exchange,
            rng,
            cfg,
        }
    }

    /// Run the whole session and return one record per step.
    pub fn run(&mut self) -> Vec<StepRecord> {
        self.market_maker.place_quotes(&mut self.exchange);

        let steps = self.cfg.steps();
        let mut records = Vec::with_capacity(steps);
        for step in 0..steps {
            records.push(self.step(step));
        }
        records
    }

    fn step(&mut self, step: usize) -> StepRecord {
        let time = step as f64 * self.cfg.dt;

        self.fundamental.step(&mut self.rng, self.cfg.dt);

        let arrival = self.rng.gen_bool(self.cfg.arrival_probability());
        let mut trader_type = "none";
        let mut order_type = "none";
        let mut is_buy = false;
        let mut quantity = 0.0;
        let mut exec_price_avg = 0.0;
        let mut num_trades = 0;
        let mut fees = 0.0;

        if arrival {
            let is_informed = self.rng.gen_bool(self.cfg.p_informed);
            let report = if is_informed {
                trader_type = "informed";
                self.informed.act(
                    &mut self.exchange,
                    self.fundamental.is_high(),
                    self.fundamental.value(),
                    self.market_maker.bid(),
                    self.market_maker.ask(),
                )
            } else {
                trader_type = "noise";
                self.noise.act(
                    &mut self.exchange,
                    self.market_maker.bid(),
                    self.market_maker.ask(),
                )
            };

            order_type = report.kind.label();
            is_buy = report.is_buy;
            quantity = report.quantity;

            if !report.trades.is_empty() {
                num_trades = report.trades.len();
                exec_price_avg = volume_weighted_price(&report.trades);
                fees = traded_notional(&report.trades) * self.cfg.fee_rate;

                // The maker infers information from the direction of
                // executed flow and refreshes both quotes.
                self.market_maker
                    .on_trade_flow(&mut self.exchange, report.is_buy);
            }
        }

        self.market_maker.relax(self.cfg.dt);

        let book = self.exchange.order_book();
        let best_bid = book
            .best_bid()
            .and_then(|o| o.limit_price())
            .and_then(|p| p.as_decimal().to_f64())
            .unwrap_or(0.0);
        let best_ask = book
            .best_ask()
            .and_then(|o| o.limit_price())
            .and_then(|p| p.as_decimal().to_f64())
            .unwrap_or(0.0);
        let spread = if best_bid > 0.0 && best_ask > 0.0 {
            best_ask - best_bid
        } else {
            0.0
        };

        StepRecord {
            time,
            arrival,
            trader_type: trader_type.to_string(),
            order_type: order_type.to_string(),
            is_buy,
            quantity,
            exec_price_avg,
            num_trades,
            best_bid,
            best_ask,
            spread,
            belief_p: self.market_maker.belief(),
            true_value: self.fundamental.value(),
            fees,
        }
    }

    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    pub fn belief(&self) -> f64 {
        self.market_maker.belief()
    }
}

fn traded_notional(trades: &[Trade]) -> f64 {
    trades
        .iter()
        .map(|t| t.notional().to_f64().unwrap_or(0.0))
        .sum()
}

fn volume_weighted_price(trades: &[Trade]) -> f64 {
    let total_quantity: f64 = trades
        .iter()
        .map(|t| t.quantity.as_decimal().to_f64().unwrap_or(0.0))
        .sum();
    if total_quantity <= 0.0 {
        return 0.0;
    }
    traded_notional(trades) / total_quantity
}
