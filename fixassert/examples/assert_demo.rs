/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Walks through the assertion DSL on messages of several FIX versions.
use fixassert::prelude::*;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOGON_FIX40: &str = "8=FIX.4.0\x019=61\x0135=A\x0134=1\x0149=BANZAI\x0152=20200408-06:49:07\x0156=EXEC\x0198=0\x01108=30\x0110=015\x01";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let piped = AssertConfig::new().with_delimiter('|');

    let logon = parse(LOGON_FIX40)?;
    let _ = assert_that(&logon)
        .with_config(piped.clone())
        .is_version_40()
        .is_admin()
        .is_logon()
        .has_body_length(61)
        .has_field_value(108, 30)
        .header()
        .has_sender_comp_id("BANZAI")
        .has_target_comp_id("EXEC")
        .and()
        .trailer()
        .has_checksum("015");
    info!("FIX.4.0 logon passed");

    for version in [Version::Fix42, Version::Fix44, Version::Fix50Sp2] {
        let order = NewOrderSingleBuilder::with_defaults(version).build()?;
        let raw = order.to_string();
        let _ = NewOrderSingleAssertFactory::new()
            .message_from_fix_version(version.identifier(), &raw)
            .has_cl_ord_id("13346")
            .has_side(Side::Buy)
            .has_order_qty(Decimal::from(1000))
            .has_ord_type(OrdType::Limit)
            .and()
            .is_valid()
            .has_version()
            .fix(version.begin_string());
        info!(version = %version, "NewOrderSingle passed");
    }

    let softly = SoftAssertions::new();
    let _ = softly
        .assert_that(&logon)
        .with_config(piped)
        .is_app()
        .has_field(11)
        .has_version()
        .fix44();
    for (index, error) in softly.errors().iter().enumerate() {
        warn!(index, "{error}");
    }
    info!(failures = softly.errors().len(), "soft assertions collected");

    Ok(())
}
