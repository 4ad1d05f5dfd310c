mod common;

#[cfg(test)]
mod tests {
    use crate::common::FakeLedger;
    use engine::range::{BlockRange, ScanWindow, WINDOW_SIZE, resolve};
    use eyre::Result;

    #[test]
    fn test_windows_cover_range_exactly_once() -> Result<()> {
        let range = BlockRange::new(10, 2_505)?;
        let windows: Vec<ScanWindow> = range.windows(WINDOW_SIZE).collect();

        assert_eq!(
            windows,
            vec![
                ScanWindow { from: 10, to: 1_009 },
                ScanWindow { from: 1_010, to: 2_009 },
                ScanWindow { from: 2_010, to: 2_505 },
            ]
        );

        let mut expected_from = range.from;
        for window in &windows {
            assert_eq!(window.from, expected_from);
            assert!(window.to - window.from < WINDOW_SIZE);
            expected_from = window.to + 1;
        }
        assert_eq!(windows.last().map(|w| w.to), Some(range.to));
        Ok(())
    }

    #[test]
    fn test_single_block_range_is_one_window() -> Result<()> {
        let range = BlockRange::new(42, 42)?;
        assert!(range.is_single_block());
        let windows: Vec<ScanWindow> = range.windows(WINDOW_SIZE).collect();
        assert_eq!(windows, vec![ScanWindow { from: 42, to: 42 }]);
        Ok(())
    }

    #[test]
    fn test_windows_stop_at_u64_max() -> Result<()> {
        let range = BlockRange::new(u64::MAX - 1_500, u64::MAX)?;
        let windows: Vec<ScanWindow> = range.windows(WINDOW_SIZE).collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].to, u64::MAX);
        Ok(())
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(BlockRange::new(11, 10).is_err());
    }

    #[tokio::test]
    async fn test_resolve_open_range_uses_head() -> Result<()> {
        let ledger = FakeLedger::new(19_000_000);

        let range = resolve(&ledger, -1, -1).await?;

        assert_eq!(range, BlockRange { from: 0, to: 19_000_000 });
        assert_eq!(ledger.head_calls(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_explicit_bounds_skip_head_query() -> Result<()> {
        let ledger = FakeLedger::new(500);

        let range = resolve(&ledger, 90, 110).await?;

        assert_eq!(range, BlockRange { from: 90, to: 110 });
        assert_eq!(ledger.head_calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_start_above_head_fails() {
        let ledger = FakeLedger::new(100);
        assert!(resolve(&ledger, 200, -1).await.is_err());
    }
}
