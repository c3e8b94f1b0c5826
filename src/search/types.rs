/// Raw query string of `GET /items/search`.
///
/// Prices are kept as text so that an unparsable value drops that criterion
/// instead of rejecting the whole request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub name: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

/// Search criteria after parsing; every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchParams {
    /// Collects the known keys from decoded query pairs.
    ///
    /// Keys match case-insensitively (`minPrice`, `minprice`, `min_price`).
    /// When a key repeats, in any spelling, the last value wins. Unknown keys
    /// are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref().to_ascii_lowercase().as_str() {
                "name" => &mut params.name,
                "minprice" | "min_price" => &mut params.min_price,
                "maxprice" | "max_price" => &mut params.max_price,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            name: self.name.clone().filter(|name| !name.is_empty()),
            min_price: parse_price(self.min_price.as_deref()),
            max_price: parse_price(self.max_price.as_deref()),
        }
    }
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        tracing::debug!("Ignoring non-finite price bound {}", value);
        return None;
    }
    Some(value)
}
