//! Country entity as served by the countries provider.

/// A country record.
///
/// Records are immutable snapshots of what the provider returned. The list
/// endpoint fills the ranking fields, the batch endpoint only `code`, `name`
/// and `flag`, and the single-code endpoint everything including `borders`
/// and `capital`. Fields the provider omitted are `None` or empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code (`cca3`), the lookup key.
    pub code: String,
    pub name: String,
    pub official_name: Option<String>,
    pub population: Option<u64>,
    /// Area in square kilometres.
    pub area: Option<f64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub capital: Vec<String>,
    pub un_member: bool,
    pub independent: bool,
    /// Codes of adjacent countries, in provider order.
    pub borders: Vec<String>,
    pub flag: Flag,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flag {
    pub svg: Option<String>,
    pub png: Option<String>,
    pub alt: Option<String>,
}

impl Country {
    /// Creates a country with only its code and display name set.
    ///
    /// # Examples
    ///
    /// ```
    /// use world_ranks::domain::entities::Country;
    ///
    /// let usa = Country::new("USA", "United States")
    ///     .with_region("Americas")
    ///     .with_population(331_000_000);
    ///
    /// assert_eq!(usa.region.as_deref(), Some("Americas"));
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            official_name: None,
            population: None,
            area: None,
            region: None,
            subregion: None,
            capital: Vec::new(),
            un_member: false,
            independent: false,
            borders: Vec::new(),
            flag: Flag::default(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = Some(subregion.into());
        self
    }

    pub fn with_un_member(mut self, un_member: bool) -> Self {
        self.un_member = un_member;
        self
    }

    pub fn with_independent(mut self, independent: bool) -> Self {
        self.independent = independent;
        self
    }

    pub fn with_borders<I, S>(mut self, borders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.borders = borders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_flag_svg(mut self, svg: impl Into<String>) -> Self {
        self.flag.svg = Some(svg.into());
        self
    }

    /// Population used for ordering; a missing value counts as zero.
    pub fn population_or_zero(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    /// Area used for ordering; a missing value counts as zero.
    pub fn area_or_zero(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    /// Returns true if the country lists at least one neighbor.
    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_country_has_empty_optional_fields() {
        let country = Country::new("CAN", "Canada");

        assert_eq!(country.code, "CAN");
        assert_eq!(country.name, "Canada");
        assert!(country.population.is_none());
        assert!(country.area.is_none());
        assert!(country.region.is_none());
        assert!(!country.un_member);
        assert!(!country.independent);
        assert!(!country.has_borders());
    }

    #[test]
    fn test_missing_numbers_order_as_zero() {
        let country = Country::new("ATA", "Antarctica");

        assert_eq!(country.population_or_zero(), 0);
        assert_eq!(country.area_or_zero(), 0.0);
    }

    #[test]
    fn test_builder_sets_fields() {
        let country = Country::new("USA", "United States")
            .with_population(331_000_000)
            .with_area(9_372_610.0)
            .with_region("Americas")
            .with_subregion("North America")
            .with_un_member(true)
            .with_independent(true)
            .with_borders(["CAN", "MEX"])
            .with_flag_svg("https://flagcdn.com/us.svg");

        assert_eq!(country.population, Some(331_000_000));
        assert_eq!(country.subregion.as_deref(), Some("North America"));
        assert_eq!(country.borders, vec!["CAN", "MEX"]);
        assert_eq!(
            country.flag.svg.as_deref(),
            Some("https://flagcdn.com/us.svg")
        );
        assert!(country.has_borders());
    }
}
