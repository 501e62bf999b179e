//! Add command implementation.
//!
//! This module implements the `add` command family, which registers
//! customers, properties, units, rate plans, and add-ons in the store.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::{Args, Subcommand};
use lodge::{AddOn, Customer, Error, Property, RatePlan, RecordStore, Unit};

/// Add a customer, property, unit, rate plan, or add-on.
#[derive(Args)]
pub struct AddCommand {
    #[command(subcommand)]
    entity: AddEntity,
}

/// The kinds of records that can be added.
#[derive(Subcommand)]
enum AddEntity {
    /// Register a customer
    Customer(AddCustomer),

    /// Register a property
    Property(AddProperty),

    /// Register a unit within a property
    Unit(AddUnit),

    /// Attach a rate plan to a unit
    RatePlan(AddRatePlan),

    /// Register a bookable add-on
    Addon(AddAddon),
}

#[derive(Args)]
struct AddCustomer {
    /// Full name
    #[arg(long, value_name = "NAME")]
    name: String,

    /// Email address
    #[arg(long, value_name = "EMAIL")]
    email: String,

    /// Contact phone number
    #[arg(long, value_name = "PHONE")]
    phone: Option<String>,
}

#[derive(Args)]
struct AddProperty {
    /// Display name
    #[arg(long, value_name = "NAME")]
    name: String,

    /// Street address
    #[arg(long, value_name = "ADDRESS")]
    address: String,

    /// Free-form description
    #[arg(long, value_name = "TEXT")]
    description: Option<String>,
}

#[derive(Args)]
struct AddUnit {
    /// Identifier of the owning property
    #[arg(long, value_name = "ID")]
    property: String,

    /// Display name
    #[arg(long, value_name = "NAME")]
    name: String,

    /// Maximum number of guests
    #[arg(long, value_name = "COUNT")]
    capacity: u32,

    /// Fallback nightly price
    #[arg(long, value_name = "AMOUNT")]
    price: f64,

    /// Amenity label (repeatable)
    #[arg(long = "amenity", value_name = "LABEL")]
    amenities: Vec<String>,
}

#[derive(Args)]
struct AddRatePlan {
    /// Identifier of the priced unit
    #[arg(long, value_name = "ID")]
    unit: String,

    /// Display name
    #[arg(long, value_name = "NAME")]
    name: String,

    /// Nightly base price
    #[arg(long, value_name = "AMOUNT")]
    base_price: f64,

    /// Minimum stay length in nights
    #[arg(long, value_name = "NIGHTS", default_value = "1")]
    min_nights: u32,

    /// Maximum stay length in nights
    #[arg(long, value_name = "NIGHTS")]
    max_nights: Option<u32>,

    /// Extra charge per weekend night
    #[arg(long, value_name = "AMOUNT", default_value = "0")]
    weekend_surcharge: f64,
}

#[derive(Args)]
struct AddAddon {
    /// Display name
    #[arg(long, value_name = "NAME")]
    name: String,

    /// Price of the add-on
    #[arg(long, value_name = "AMOUNT")]
    price: f64,

    /// Free-form description
    #[arg(long, value_name = "TEXT")]
    description: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = open_store(global, &config)?;

        match self.entity {
            AddEntity::Customer(args) => {
                let customer = Customer::new(&args.name, &args.email, args.phone)
                    .map_err(Error::from)?;
                store.save_customer(&customer)?;
                println!("Added customer: {}", customer.id);
            }
            AddEntity::Property(args) => {
                let property = Property::new(&args.name, &args.address, args.description)
                    .map_err(Error::from)?;
                store.save_property(&property)?;
                println!("Added property: {}", property.id);
            }
            AddEntity::Unit(args) => {
                if store.find_property(&args.property)?.is_none() {
                    return Err(CliError::Library(Error::NotFound {
                        resource: format!("property {}", args.property),
                    }));
                }
                let unit = Unit::new(
                    &args.property,
                    &args.name,
                    args.capacity,
                    args.price,
                    args.amenities,
                )
                .map_err(Error::from)?;
                store.save_unit(&unit)?;
                println!("Added unit: {}", unit.id);
            }
            AddEntity::RatePlan(args) => {
                if store.find_unit(&args.unit)?.is_none() {
                    return Err(CliError::Library(Error::NotFound {
                        resource: format!("unit {}", args.unit),
                    }));
                }
                let plan = RatePlan::new(
                    &args.unit,
                    &args.name,
                    args.base_price,
                    args.min_nights,
                    args.max_nights,
                    args.weekend_surcharge,
                )
                .map_err(Error::from)?;
                store.save_rate_plan(&plan)?;
                println!("Added rate plan: {}", plan.id);
            }
            AddEntity::Addon(args) => {
                let addon =
                    AddOn::new(&args.name, args.price, args.description).map_err(Error::from)?;
                store.save_addon(&addon)?;
                println!("Added add-on: {}", addon.id);
            }
        }

        Ok(())
    }
}
