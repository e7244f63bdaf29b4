#![allow(dead_code)]

use std::path::PathBuf;

use haven_core::{
    Catalog, Listing, ListingDetails, ListingStatus, Location, Marketplace, MarketplaceBuilder,
    PropertyDetails, PropertyType, TourDetails,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Helper function to build a property listing
pub fn property(id: &str, city: &str, price: i64, rating: f64) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("{city} stay {id}"),
        description: String::new(),
        location: Location {
            city: Some(city.to_string()),
            area: String::new(),
            address: None,
        },
        price: Decimal::from(price),
        tags: vec![],
        images: vec![],
        rating,
        review_count: 5,
        featured: false,
        verified: false,
        status: ListingStatus::Active,
        created_at: Timestamp::from_second(1_704_067_200).expect("valid timestamp"),
        updated_at: Timestamp::from_second(1_704_067_200).expect("valid timestamp"),
        details: ListingDetails::Property(PropertyDetails {
            property_type: PropertyType::Apartment,
            capacity: 4,
            bedrooms: 2,
            beds: 2,
            bathrooms: 1,
            latitude: None,
            longitude: None,
        }),
    }
}

/// Helper function to build a tour listing
pub fn tour(id: &str, area: &str, price: i64, max_group_size: u32, rating: f64) -> Listing {
    Listing {
        id: id.to_string(),
        name: format!("{area} tour {id}"),
        description: String::new(),
        location: Location {
            city: None,
            area: area.to_string(),
            address: None,
        },
        price: Decimal::from(price),
        tags: vec![],
        images: vec![],
        rating,
        review_count: 5,
        featured: false,
        verified: false,
        status: ListingStatus::Active,
        created_at: Timestamp::from_second(1_704_067_200).expect("valid timestamp"),
        updated_at: Timestamp::from_second(1_704_067_200).expect("valid timestamp"),
        details: ListingDetails::Tour(TourDetails {
            duration: "2 days, 1 night".to_string(),
            max_group_size,
            included: vec![],
            excluded: vec![],
        }),
    }
}

/// A small catalog spanning several cities, categories and prices
pub fn sample_listings() -> Vec<Listing> {
    let mut gulshan = property("gulshan-loft", "Dhaka", 150, 4.8);
    gulshan.name = "Luxury Apartment in Gulshan".to_string();
    gulshan.location.area = "Gulshan 2".to_string();
    gulshan.tags = vec!["wifi".to_string(), "pool".to_string(), "gym".to_string()];
    gulshan.featured = true;
    gulshan.verified = true;

    let mut tea = property("tea-cottage", "Sylhet", 100, 4.7);
    tea.name = "Tea Garden Cottage".to_string();
    tea.description = "Wake up among the tea gardens".to_string();
    tea.tags = vec!["wifi".to_string()];
    if let ListingDetails::Property(details) = &mut tea.details {
        details.property_type = PropertyType::Cottage;
        details.capacity = 2;
    }

    let mut beach = property("cox-resort", "Cox's Bazar", 250, 4.8);
    beach.name = "Beachfront Resort".to_string();
    beach.tags = vec!["pool".to_string(), "beach access".to_string()];
    beach.created_at = Timestamp::from_second(1_717_200_000).expect("valid timestamp");
    if let ListingDetails::Property(details) = &mut beach.details {
        details.property_type = PropertyType::Resort;
        details.capacity = 6;
    }

    let mut banani = property("banani-studio", "Dhaka", 60, 4.4);
    banani.name = "Cozy Studio in Banani".to_string();
    banani.location.area = "Banani".to_string();
    banani.tags = vec!["wifi".to_string()];

    let mut closed = property("old-guesthouse", "Khulna", 40, 4.1);
    closed.status = ListingStatus::Inactive;

    let mut sundarbans = tour("sundarbans-3d", "Sundarbans", 350, 12, 4.9);
    sundarbans.name = "Sundarbans Mangrove Expedition".to_string();
    sundarbans.tags = vec!["wildlife".to_string(), "boat ride".to_string()];
    sundarbans.featured = true;

    let mut hills = tour("bandarban-trek", "Bandarban", 180, 8, 4.6);
    hills.name = "Bandarban Hill Trek".to_string();

    vec![gulshan, tea, beach, banani, closed, sundarbans, hills]
}

/// Helper function to write the sample catalog into a temporary directory
pub fn create_test_catalog() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let catalog_path = temp_dir.path().join("catalog.json");
    Catalog::new(sample_listings())
        .expect("Failed to build catalog")
        .save(&catalog_path)
        .expect("Failed to write catalog");
    (temp_dir, catalog_path)
}

/// Helper function to create a test marketplace over the sample catalog
pub async fn create_test_marketplace() -> (TempDir, Marketplace) {
    let (temp_dir, catalog_path) = create_test_catalog();
    let marketplace = MarketplaceBuilder::new()
        .with_catalog_path(Some(&catalog_path))
        .build()
        .await
        .expect("Failed to create marketplace");
    (temp_dir, marketplace)
}
