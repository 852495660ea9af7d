//! Effective yield of an illustration
//!
//! Two measures are available: the closed-form single-point approximation
//! shown on the standard ledger, and a cash-flow IRR over the yearly premium
//! stream solved with Newton-Raphson.

/// Closed-form yield: `(cash_value / premiums)^(1 / years) - 1`
///
/// Returns 0 when the cash value does not exceed premiums paid or when
/// there are no years to the key age. Result is a decimal rate.
pub fn approximate_effective_yield(cash_value: f64, total_premiums: f64, years: i32) -> f64 {
    if years <= 0 || !(cash_value > total_premiums) || !(total_premiums > 0.0) {
        return 0.0;
    }
    (cash_value / total_premiums).powf(1.0 / years as f64) - 1.0
}

/// Annual IRR of a yearly cash-flow stream (flow `t` at the start of year `t`)
///
/// Newton-Raphson from 5%, falling back to bisection over (-99%, 1000%)
/// when the slope vanishes or Newton does not settle. `None` when the flows
/// never change sign.
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    const TOLERANCE: f64 = 1e-10;

    if cashflows.iter().all(|cf| cf.abs() < TOLERANCE) {
        return if cashflows.is_empty() { None } else { Some(0.0) };
    }
    let outflows = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    let inflows = cashflows.iter().any(|&cf| cf > TOLERANCE);
    if !(outflows && inflows) {
        return None;
    }

    let mut rate = 0.05;
    for _ in 0..100 {
        let (value, slope) = present_value(cashflows, rate);
        if slope.abs() < 1e-20 {
            break;
        }
        let next = (rate - value / slope).clamp(MIN_RATE, MAX_RATE);
        if (next - rate).abs() < TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    bisect(cashflows, TOLERANCE)
}

const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;

/// Present value of the stream at `rate` and its derivative in `rate`
fn present_value(cashflows: &[f64], rate: f64) -> (f64, f64) {
    cashflows
        .iter()
        .zip(0..)
        .fold((0.0, 0.0), |(value, slope), (&cf, t)| {
            let discount = (1.0 + rate).powi(t);
            (value + cf / discount, slope - t as f64 * cf / (discount * (1.0 + rate)))
        })
}

fn bisect(cashflows: &[f64], tolerance: f64) -> Option<f64> {
    let value_at = |rate: f64| present_value(cashflows, rate).0;
    let (mut low, mut high) = (MIN_RATE, MAX_RATE);
    let mut low_value = value_at(low);
    if low_value * value_at(high) > 0.0 {
        return None;
    }

    while high - low > tolerance {
        let mid = 0.5 * (low + high);
        let mid_value = value_at(mid);
        if mid_value.abs() < tolerance {
            return Some(mid);
        }
        if mid_value * low_value < 0.0 {
            high = mid;
        } else {
            low = mid;
            low_value = mid_value;
        }
    }
    Some(0.5 * (low + high))
}

/// Annual cash flows for a premium stream redeemed for `cash_value` at the end
///
/// Premiums are paid at the start of each year; the cash value is received at
/// the end of the last year.
pub fn premium_cashflows(premiums: &[f64], cash_value: f64) -> Vec<f64> {
    let mut flows: Vec<f64> = premiums.iter().map(|p| -p).collect();
    flows.push(cash_value);
    flows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_approximate_yield() {
        // Doubling over 10 years
        let y = approximate_effective_yield(200_000.0, 100_000.0, 10);
        assert_relative_eq!(y, 2.0_f64.powf(0.1) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_approximate_yield_zero_cases() {
        assert_eq!(approximate_effective_yield(90_000.0, 100_000.0, 10), 0.0);
        assert_eq!(approximate_effective_yield(100_000.0, 100_000.0, 10), 0.0);
        assert_eq!(approximate_effective_yield(200_000.0, 100_000.0, 0), 0.0);
        assert_eq!(approximate_effective_yield(200_000.0, 100_000.0, -5), 0.0);
        assert_eq!(approximate_effective_yield(0.0, 0.0, 30), 0.0);
    }

    #[test]
    fn test_single_year_stream() {
        let flows = premium_cashflows(&[1_000.0], 1_100.0);
        assert_eq!(flows, vec![-1_000.0, 1_100.0]);
        assert_relative_eq!(calculate_irr(&flows).unwrap(), 0.10, epsilon = 1e-8);
    }

    #[test]
    fn test_level_premium_stream() {
        // Two premiums of 1000 credited at 5%: 1000*1.05^2 + 1000*1.05
        let flows = premium_cashflows(&[1_000.0, 1_000.0], 1_000.0 * 1.05 * 1.05 + 1_000.0 * 1.05);
        assert_eq!(flows.len(), 3);
        assert_relative_eq!(calculate_irr(&flows).unwrap(), 0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_limited_pay_stream() {
        // Ten premiums then ten paid-up years, all credited at 4%
        let mut premiums = vec![2_500.0; 10];
        premiums.extend([0.0; 10]);
        let cash_value: f64 = premiums
            .iter()
            .enumerate()
            .map(|(t, p)| p * 1.04_f64.powi(20 - t as i32))
            .sum();

        let irr = calculate_irr(&premium_cashflows(&premiums, cash_value)).unwrap();
        assert_relative_eq!(irr, 0.04, epsilon = 1e-8);
    }

    #[test]
    fn test_losing_stream_has_negative_irr() {
        let irr = calculate_irr(&premium_cashflows(&[1_000.0; 5], 4_000.0)).unwrap();
        assert!(irr < 0.0);
        let (value, _) = present_value(&premium_cashflows(&[1_000.0; 5], 4_000.0), irr);
        assert!(value.abs() < 1e-6);
    }

    #[test]
    fn test_no_sign_change() {
        assert_eq!(calculate_irr(&[-100.0, -100.0]), None);
        assert_eq!(calculate_irr(&premium_cashflows(&[1_000.0], 0.0)), None);
        assert_eq!(calculate_irr(&[]), None);
        assert_eq!(calculate_irr(&[0.0, 0.0]), Some(0.0));
    }
}
