use polars::prelude::{col, lit, LazyFrame, NamedFrom, Series};

pub trait ReadingFrameFilterExt {
    /// Keeps only rows whose `station_id` is one of `station_ids`.
    ///
    /// An empty slice means no station filter; the frame is returned unchanged.
    fn filter_stations(self, station_ids: &[String]) -> LazyFrame;

    /// Filters a reading LazyFrame by a year range.
    ///
    /// # Arguments
    /// * `year_from`: Lower bound (inclusive), ignored when `None`.
    /// * `year_to`: Upper bound (inclusive), ignored when `None`.
    ///
    /// Both bounds apply independently of each other.
    fn filter_years(self, year_from: Option<i32>, year_to: Option<i32>) -> LazyFrame;
}

impl ReadingFrameFilterExt for LazyFrame {
    fn filter_stations(self, station_ids: &[String]) -> LazyFrame {
        if station_ids.is_empty() {
            return self;
        }
        let ids = Series::new("station_ids".into(), station_ids);
        self.filter(col("station_id").is_in(lit(ids)))
    }

    fn filter_years(self, year_from: Option<i32>, year_to: Option<i32>) -> LazyFrame {
        let mut frame = self;
        if let Some(from) = year_from {
            frame = frame.filter(col("year").gt_eq(lit(from)));
        }
        if let Some(to) = year_to {
            frame = frame.filter(col("year").lt_eq(lit(to)));
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{df, IntoLazy};

    fn frame() -> LazyFrame {
        df!(
            "station_id" => ["A", "A", "B", "C"],
            "year" => [1990i32, 1995, 1990, 2000],
        )
        .unwrap()
        .lazy()
    }

    #[test]
    fn test_filter_stations() {
        let ids = vec!["A".to_string(), "C".to_string()];
        let out = frame().filter_stations(&ids).collect().unwrap();
        assert_eq!(out.height(), 3);

        let all = frame().filter_stations(&[]).collect().unwrap();
        assert_eq!(all.height(), 4);
    }

    #[test]
    fn test_filter_years_inclusive_and_independent() {
        let out = frame().filter_years(Some(1990), Some(1995)).collect().unwrap();
        assert_eq!(out.height(), 3);

        let from_only = frame().filter_years(Some(1995), None).collect().unwrap();
        assert_eq!(from_only.height(), 2);

        let to_only = frame().filter_years(None, Some(1990)).collect().unwrap();
        assert_eq!(to_only.height(), 2);

        let inverted = frame().filter_years(Some(2000), Some(1990)).collect().unwrap();
        assert_eq!(inverted.height(), 0);
    }
}
