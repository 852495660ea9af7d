//! CSV ledger and summary output

use std::io::Write;

use crate::error::Result;
use crate::projection::{IllustrationSummary, YearlyProjection};
use crate::request::DisplayOptions;

/// Ledger header for the given display options
pub fn projection_header(options: &DisplayOptions) -> Vec<&'static str> {
    let mut header = vec!["PolicyYear", "Age", "PremiumPaid", "CumulativePremiums"];
    if options.show_guaranteed {
        header.push("GuaranteedCashValue");
    }
    if options.show_current {
        header.extend(["CurrentCashValue", "SurrenderValue", "PaidUpValue"]);
    }
    header.extend(["DeathBenefit", "NetAmount"]);
    header
}

/// Write the ledger, showing only the columns the options enable
pub fn write_projection_csv<W: Write>(
    writer: W,
    rows: &[YearlyProjection],
    options: &DisplayOptions,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(projection_header(options))?;

    for row in rows {
        let mut record = vec![
            row.policy_year.to_string(),
            row.age.to_string(),
            format!("{:.0}", row.premium_paid),
            format!("{:.0}", row.cumulative_premiums),
        ];
        if options.show_guaranteed {
            record.push(format!("{:.0}", row.cash_value.guaranteed));
        }
        if options.show_current {
            record.push(format!("{:.0}", row.cash_value.current));
            record.push(format!("{:.0}", row.end_of_year_values.surrender_value));
            record.push(format!("{:.0}", row.end_of_year_values.paid_up_value));
        }
        record.push(format!("{:.0}", row.death_benefit));
        record.push(format!("{:.0}", row.net_amount));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write one summary row per labelled illustration
pub fn write_summary_csv<W: Write>(writer: W, summaries: &[(String, IllustrationSummary)]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Illustration",
        "TotalPremiumsPaid",
        "CashValueAt65",
        "CashValueAt100",
        "DeathBenefitAt65",
        "InternalRateOfReturn",
        "BreakEvenYear",
        "MaximumOutlay",
    ])?;

    for (label, summary) in summaries {
        csv_writer.write_record([
            label.clone(),
            format!("{:.0}", summary.total_premiums_paid),
            format!("{:.0}", summary.cash_value_at_65),
            format!("{:.0}", summary.cash_value_at_100),
            format!("{:.0}", summary.death_benefit_at_65),
            format!("{:.2}", summary.internal_rate_of_return),
            summary.break_even_year.map(|y| y.to_string()).unwrap_or_default(),
            format!("{:.0}", summary.maximum_outlay),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
