//! Display implementations for domain models.
//!
//! All implementations produce markdown so the CLI can render it and the MCP
//! server can hand it to clients verbatim.

use std::fmt;

use super::{datetime::LocalDateTime, money::Money};
use crate::models::{
    BookingQuote, CatalogStats, FeeRatio, Listing, ListingCategory, ListingDetails,
    ListingStatus, PriceUnit, PropertyType,
};

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ListingCategory::from(*self))
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FeeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl Listing {
    fn location_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.location.area.is_empty() {
            parts.push(&self.location.area);
        }
        if let Some(city) = &self.location.city {
            parts.push(city);
        }
        parts.join(", ")
    }

    fn flags_line(&self) -> String {
        let mut flags = vec![self.status.as_str()];
        if self.featured {
            flags.push("Featured");
        }
        if self.verified {
            flags.push("Verified");
        }
        flags.join(" · ")
    }

    fn rating_line(&self) -> String {
        match self.review_count {
            0 => "No reviews yet".to_string(),
            1 => format!("{:.1} (1 review)", self.rating),
            n => format!("{:.1} ({n} reviews)", self.rating),
        }
    }

    /// Compact entry used when listings are shown as search results.
    pub(super) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **{}** in {}",
            self.category(),
            self.location_line()
        )?;
        writeln!(
            f,
            "- **Price**: {} / {}",
            Money(self.price),
            self.price_unit()
        )?;
        writeln!(f, "- **Rating**: {}", self.rating_line())?;
        if self.featured || self.verified || !self.is_bookable() {
            writeln!(f, "- **Status**: {}", self.flags_line())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Type: {}", self.category())?;
        writeln!(f, "- Location: {}", self.location_line())?;
        if let Some(address) = &self.location.address {
            writeln!(f, "- Address: {address}")?;
        }
        writeln!(f, "- Price: {} / {}", Money(self.price), self.price_unit())?;
        writeln!(f, "- Rating: {}", self.rating_line())?;
        writeln!(f, "- Status: {}", self.flags_line())?;

        match &self.details {
            ListingDetails::Property(details) => {
                writeln!(f, "- Guests: up to {}", details.capacity)?;
                writeln!(
                    f,
                    "- Rooms: {} bedrooms, {} beds, {} bathrooms",
                    details.bedrooms, details.beds, details.bathrooms
                )?;
            }
            ListingDetails::Tour(details) => {
                writeln!(f, "- Duration: {}", details.duration)?;
                writeln!(f, "- Group size: up to {}", details.max_group_size)?;
            }
        }
        writeln!(f, "- Listed: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if !self.tags.is_empty() {
            let heading = if self.is_tour() { "Highlights" } else { "Amenities" };
            writeln!(f, "\n## {heading}")?;
            writeln!(f)?;
            for tag in &self.tags {
                writeln!(f, "- {tag}")?;
            }
        }

        if let ListingDetails::Tour(details) = &self.details {
            for (heading, items) in [("Included", &details.included), ("Excluded", &details.excluded)] {
                if items.is_empty() {
                    continue;
                }
                writeln!(f, "\n## {heading}")?;
                writeln!(f)?;
                for item in items {
                    writeln!(f, "- {item}")?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for BookingQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} x {} {}: {}",
            Money(self.base_price),
            self.multiplier,
            self.unit.count_label(self.multiplier),
            Money(self.subtotal)
        )?;
        writeln!(f, "- Platform fee ({}): {}", self.fee_ratio, Money(self.fee))?;
        writeln!(f, "- Host revenue: {}", Money(self.counterpart_revenue))?;
        writeln!(f, "- **Total**: {}", Money(self.subtotal))
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Catalog")?;
        writeln!(f)?;

        if self.total == 0 {
            return writeln!(f, "The catalog is empty.");
        }

        writeln!(f, "- **Listings**: {} ({} active)", self.total, self.active)?;
        writeln!(f, "- **Featured**: {}", self.featured)?;
        writeln!(f, "- **Verified**: {}", self.verified)?;
        match self.mean_rating {
            Some(rating) => writeln!(f, "- **Mean rating**: {rating:.2}")?,
            None => writeln!(f, "- **Mean rating**: no reviews yet")?,
        }

        writeln!(f, "\n## By category")?;
        writeln!(f)?;
        for (category, count) in &self.by_category {
            writeln!(f, "- {category}: {count}")?;
        }

        Ok(())
    }
}
