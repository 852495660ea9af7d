//! Load illustration requests from wizard JSON or flat CSV batches

use super::{
    ClientInfo, DisplayOptions, DividendScale, Gender, HealthClass, IllustrationAssumptions,
    IllustrationRequest, PaymentDuration, PremiumMode, ProductType, SmokerStatus,
};
use crate::error::{IllustrationError, Result};
use csv::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw CSV row for batch illustration input
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "RequestId")]
    _request_id: String,
    #[serde(rename = "ClientName")]
    client_name: String,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Smoker")]
    smoker: String,
    #[serde(rename = "HealthClass")]
    health_class: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "ProductId")]
    product_id: String,
    #[serde(rename = "ProductName")]
    product_name: String,
    #[serde(rename = "ProductType")]
    product_type: String,
    #[serde(rename = "Coverage")]
    coverage: f64,
    #[serde(rename = "Premium")]
    premium: f64,
    #[serde(rename = "PremiumMode")]
    premium_mode: String,
    #[serde(rename = "PaymentDuration")]
    payment_duration: String,
    #[serde(rename = "EndAge")]
    end_age: u8,
    #[serde(rename = "CurrentRate")]
    current_rate: f64,
    #[serde(rename = "GuaranteedRate")]
    guaranteed_rate: f64,
    #[serde(rename = "DividendScale")]
    dividend_scale: String,
    #[serde(rename = "ExpenseCharges")]
    expense_charges: f64,
    #[serde(rename = "MortalityTable")]
    mortality_table: String,
}

fn unknown(column: &'static str, value: &str) -> IllustrationError {
    IllustrationError::UnknownValue {
        column,
        value: value.to_string(),
    }
}

impl CsvRow {
    fn to_request(self) -> Result<IllustrationRequest> {
        let gender = match self.gender.as_str() {
            "Male" | "M" => Gender::Male,
            "Female" | "F" => Gender::Female,
            other => return Err(unknown("Gender", other)),
        };

        let smoker_status = match self.smoker.as_str() {
            "Smoker" | "Y" => SmokerStatus::Smoker,
            "Non-Smoker" | "N" => SmokerStatus::NonSmoker,
            other => return Err(unknown("Smoker", other)),
        };

        let health_class = match self.health_class.as_str() {
            "Preferred Plus" => HealthClass::PreferredPlus,
            "Preferred" => HealthClass::Preferred,
            "Standard Plus" => HealthClass::StandardPlus,
            "Standard" => HealthClass::Standard,
            "Substandard" => HealthClass::Substandard,
            other => return Err(unknown("HealthClass", other)),
        };

        let product_type = match self.product_type.as_str() {
            "Term Life" => ProductType::TermLife,
            "Whole Life" => ProductType::WholeLife,
            "Universal Life" => ProductType::UniversalLife,
            "Variable Universal Life" => ProductType::VariableUniversalLife,
            "Indexed Universal Life" => ProductType::IndexedUniversalLife,
            other => return Err(unknown("ProductType", other)),
        };

        let premium_mode = match self.premium_mode.as_str() {
            "Annual" => PremiumMode::Annual,
            "Semi-Annual" => PremiumMode::SemiAnnual,
            "Quarterly" => PremiumMode::Quarterly,
            "Monthly" => PremiumMode::Monthly,
            other => return Err(unknown("PremiumMode", other)),
        };

        let payment_duration: PaymentDuration = self
            .payment_duration
            .parse()
            .map_err(|_| unknown("PaymentDuration", &self.payment_duration))?;

        let dividend_scale = match self.dividend_scale.as_str() {
            "Current" => DividendScale::Current,
            "Zero" => DividendScale::Zero,
            other => return Err(unknown("DividendScale", other)),
        };

        Ok(IllustrationRequest {
            client_info: ClientInfo {
                name: self.client_name,
                age: self.age,
                gender,
                smoker_status,
                health_class,
                state: self.state,
            },
            product_id: self.product_id,
            product_name: self.product_name,
            product_type,
            coverage_amount: self.coverage,
            premium_amount: self.premium,
            premium_mode,
            payment_duration,
            illustration_end_age: self.end_age,
            assumptions: IllustrationAssumptions {
                current_interest_rate: self.current_rate,
                guaranteed_interest_rate: self.guaranteed_rate,
                dividend_scale,
                expense_charges: self.expense_charges,
                mortality_table: self.mortality_table,
            },
            options: DisplayOptions::default(),
        })
    }
}

/// Load a single request from a wizard JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<IllustrationRequest> {
    let file = File::open(path)?;
    let request = serde_json::from_reader(BufReader::new(file))?;
    Ok(request)
}

/// Load all requests from a CSV batch file
pub fn load_requests_csv<P: AsRef<Path>>(path: P) -> Result<Vec<IllustrationRequest>> {
    let file = File::open(path)?;
    load_requests_from_reader(file)
}

/// Load requests from any reader (e.g., string buffer, network stream)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<IllustrationRequest>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut requests = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.to_request()?);
    }

    log::debug!("loaded {} illustration requests", requests.len());
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "RequestId,ClientName,Age,Gender,Smoker,HealthClass,State,ProductId,ProductName,ProductType,Coverage,Premium,PremiumMode,PaymentDuration,EndAge,CurrentRate,GuaranteedRate,DividendScale,ExpenseCharges,MortalityTable";

    #[test]
    fn test_load_requests_from_reader() {
        let data = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "r1,Avery Smith,35,Male,Non-Smoker,Preferred,CA,term-20,Guardian Term 20,Term Life,750000,450,Annual,20 Years,58,4.0,2.0,Zero,0,2017 CSO",
            "r2,Sam Ortiz,45,F,Y,Standard,NY,ul-flex,FlexLife UL,Universal Life,250000,6000,Monthly,To Age 65,100,5.5,3.0,Current,3.5,2017 CSO",
        );

        let requests = load_requests_from_reader(data.as_bytes()).unwrap();
        assert_eq!(requests.len(), 2);

        let term = &requests[0];
        assert_eq!(term.product_type, ProductType::TermLife);
        assert_eq!(term.payment_duration, PaymentDuration::Years(20));
        assert_eq!(term.client_info.smoker_status, SmokerStatus::NonSmoker);

        let ul = &requests[1];
        assert_eq!(ul.client_info.gender, Gender::Female);
        assert!(ul.client_info.smoker_status.is_smoker());
        assert_eq!(ul.premium_mode, PremiumMode::Monthly);
        assert_eq!(ul.payment_duration, PaymentDuration::ToAge(65));
        assert_eq!(ul.assumptions.current_interest_rate, 5.5);
    }

    #[test]
    fn test_unknown_product_type_names_column() {
        let data = format!(
            "{}\n{}\n",
            HEADER,
            "r1,Avery Smith,35,Male,Non-Smoker,Preferred,CA,x,X,Endowment,100000,1000,Annual,Life,100,4.0,2.0,Zero,0,2017 CSO",
        );

        let err = load_requests_from_reader(data.as_bytes()).unwrap_err();
        match err {
            IllustrationError::UnknownValue { column, value } => {
                assert_eq!(column, "ProductType");
                assert_eq!(value, "Endowment");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_sample_files() {
        let requests = load_requests_csv("data/requests/batch.csv").expect("Failed to load batch");
        assert_eq!(requests.len(), 5);
        assert_eq!(requests[4].product_type, ProductType::IndexedUniversalLife);

        let request = load_request("data/requests/whole_life.json").expect("Failed to load request");
        let mut from_csv = requests[1].clone();
        from_csv.options = request.options;
        assert_eq!(request, from_csv);
        assert!(request.options.include_dividends);
    }
}
