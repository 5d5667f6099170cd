use crate::types::TokenSnapshot;

const TOP_HOLDER_WINDOW: usize = 10;

/// One holder's slice of supply. `percent_of_supply` is unknown whenever the
/// total supply is zero or unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct HolderShare {
    pub address: String,
    pub percent_of_supply: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct HolderConcentration {
    pub shares: Vec<HolderShare>,
    pub top5_pct: Option<f64>,
    pub top10_pct: Option<f64>,
}

/// Percentage of supply held by each of the top holders, with running sums
/// over the top-5 and top-10 subsets. Sums are kept in full precision;
/// rounding is the renderer's job. A zero or unknown total supply makes
/// every share unknown rather than dividing by zero.
pub fn holder_concentration(snapshot: &TokenSnapshot) -> HolderConcentration {
    let holders = &snapshot.top_holders;
    if holders.is_empty() {
        return HolderConcentration::default();
    }

    let supply = match snapshot.total_supply {
        Some(supply) if supply > 0.0 => supply,
        _ => {
            let shares = holders
                .iter()
                .take(TOP_HOLDER_WINDOW)
                .map(|h| HolderShare {
                    address: h.address.clone(),
                    percent_of_supply: None,
                })
                .collect();
            return HolderConcentration {
                shares,
                top5_pct: None,
                top10_pct: None,
            };
        }
    };

    let scale = 10f64.powi(snapshot.decimals as i32);
    let mut shares = Vec::new();
    let mut top5 = 0.0;
    let mut top10 = 0.0;

    for (rank, holder) in holders.iter().take(TOP_HOLDER_WINDOW).enumerate() {
        let pct = (holder.amount_raw as f64 / scale) / supply * 100.0;
        if rank < 5 {
            top5 += pct;
        }
        top10 += pct;
        shares.push(HolderShare {
            address: holder.address.clone(),
            percent_of_supply: Some(pct),
        });
    }

    HolderConcentration {
        shares,
        top5_pct: Some(top5),
        top10_pct: Some(top10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HolderBalance;

    fn snapshot_with_holders(
        supply: Option<f64>,
        decimals: u8,
        amounts: &[u128],
    ) -> TokenSnapshot {
        let mut snapshot = TokenSnapshot::empty("addr");
        snapshot.total_supply = supply;
        snapshot.decimals = decimals;
        snapshot.top_holders = amounts
            .iter()
            .enumerate()
            .map(|(i, &amount_raw)| HolderBalance {
                address: format!("holder{}", i + 1),
                amount_raw,
            })
            .collect();
        snapshot
    }

    #[test]
    fn test_three_holder_scenario() {
        let snapshot = snapshot_with_holders(Some(100.0), 0, &[50, 30, 20]);

        let concentration = holder_concentration(&snapshot);

        let pcts: Vec<f64> = concentration
            .shares
            .iter()
            .map(|s| s.percent_of_supply.unwrap())
            .collect();
        assert_eq!(pcts, vec![50.0, 30.0, 20.0]);
        // only 3 holders exist, so the top-5 window covers all of them
        assert_eq!(concentration.top5_pct, Some(100.0));
        assert_eq!(concentration.top10_pct, Some(100.0));
    }

    #[test]
    fn test_decimal_scaling_of_raw_amounts() {
        // 1_000_000 raw at 6 decimals is 1.0 human unit
        let snapshot = snapshot_with_holders(Some(10.0), 6, &[1_000_000]);

        let concentration = holder_concentration(&snapshot);

        assert_eq!(concentration.shares[0].percent_of_supply, Some(10.0));
    }

    #[test]
    fn test_top5_never_exceeds_top10() {
        let amounts = [40, 20, 10, 8, 7, 5, 4, 3, 2, 1];
        let snapshot = snapshot_with_holders(Some(100.0), 0, &amounts);

        let concentration = holder_concentration(&snapshot);

        let top5 = concentration.top5_pct.unwrap();
        let top10 = concentration.top10_pct.unwrap();
        assert!(top5 <= top10);
        assert!((top5 - 85.0).abs() < 1e-9);
        assert!((top10 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_supply_makes_every_share_unknown() {
        let snapshot = snapshot_with_holders(None, 0, &[50, 30]);

        let concentration = holder_concentration(&snapshot);

        assert_eq!(concentration.shares.len(), 2);
        assert!(concentration
            .shares
            .iter()
            .all(|s| s.percent_of_supply.is_none()));
        assert_eq!(concentration.top5_pct, None);
        assert_eq!(concentration.top10_pct, None);
    }

    #[test]
    fn test_zero_supply_never_divides() {
        let snapshot = snapshot_with_holders(Some(0.0), 0, &[50]);

        let concentration = holder_concentration(&snapshot);

        assert_eq!(concentration.shares[0].percent_of_supply, None);
        assert_eq!(concentration.top5_pct, None);
    }

    #[test]
    fn test_empty_holder_list() {
        let snapshot = snapshot_with_holders(Some(100.0), 0, &[]);

        let concentration = holder_concentration(&snapshot);

        assert!(concentration.shares.is_empty());
        assert_eq!(concentration.top5_pct, None);
        assert_eq!(concentration.top10_pct, None);
    }

    #[test]
    fn test_window_caps_at_ten_holders() {
        let amounts = [10, 10, 10, 10, 10, 5, 5, 5, 5, 5, 99, 99];
        let snapshot = snapshot_with_holders(Some(1000.0), 0, &amounts);

        let concentration = holder_concentration(&snapshot);

        assert_eq!(concentration.shares.len(), 10);
        // 11th and 12th holders stay out of the sums
        assert!((concentration.top10_pct.unwrap() - 7.5).abs() < 1e-9);
    }
}
