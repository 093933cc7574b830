//! Tests for adjacency extraction from source grids

#[cfg(test)]
mod tests {
    use markovtile::analysis::training::Trainer;
    use markovtile::analysis::transitions::TransitionModel;
    use markovtile::spatial::color::Color;
    use markovtile::spatial::grid::PixelGrid;

    const A: Color = Color::rgb(1, 0, 0);
    const B: Color = Color::rgb(0, 1, 0);
    const C: Color = Color::rgb(0, 0, 1);
    const D: Color = Color::rgb(1, 1, 1);

    fn grid(rows: &[Vec<Color>]) -> PixelGrid {
        PixelGrid::from_rows(rows).unwrap()
    }

    // Tests a 2x2 image records exactly the look-left and look-up pairs of its interior pixel
    // Verified by including row 0 in the scan
    #[test]
    fn test_ingest_two_by_two() {
        let mut trainer = Trainer::new();
        let recorded = trainer.ingest(&grid(&[vec![A, B], vec![C, D]]));

        let model = trainer.model();
        assert_eq!(recorded, 2);
        assert_eq!(model.total_pairs(), 2);
        assert_eq!(model.count(D, C), 1, "horizontal pair looks left");
        assert_eq!(model.count(D, B), 1, "vertical pair looks up");
        assert!(!model.has_from(A));
    }

    // Tests pair count is 2 * (w - 1) * (h - 1)
    // Verified by recording only horizontal pairs
    #[test]
    fn test_ingest_pair_count() {
        let rows: Vec<Vec<Color>> = (0..4)
            .map(|y| (0..5).map(|x| if (x + y) % 2 == 0 { A } else { B }).collect())
            .collect();
        let mut trainer = Trainer::new();
        let recorded = trainer.ingest(&grid(&rows));

        assert_eq!(recorded, 2 * 4 * 3);
        assert_eq!(trainer.model().total_pairs(), 24);
        assert_eq!(trainer.model().count(A, B), 12);
        assert_eq!(trainer.model().count(B, A), 12);
        assert!(trainer.model().check_invariants().is_ok());
    }

    // Tests images thinner than two pixels contribute nothing
    // Verified by removing the size guard
    #[test]
    fn test_ingest_too_small() {
        let mut trainer = Trainer::new();

        assert_eq!(trainer.ingest(&grid(&[vec![A, B, C]])), 0);
        assert_eq!(trainer.ingest(&grid(&[vec![A], vec![B]])), 0);
        assert_eq!(trainer.ingest(&PixelGrid::filled(0, 0, A)), 0);
        assert!(trainer.model().is_empty());
        assert_eq!(trainer.images_ingested(), 3);
    }

    // Tests ingestion order across images does not change the model
    // Verified by clearing the model between images
    #[test]
    fn test_ingest_commutative_across_images() {
        let first = grid(&[vec![A, B, C], vec![B, C, D], vec![C, D, A]]);
        let second = grid(&[vec![D, D], vec![A, B]]);

        let mut forward = Trainer::new();
        forward.ingest(&first);
        forward.ingest(&second);

        let mut backward = Trainer::new();
        backward.ingest(&second);
        backward.ingest(&first);

        assert_eq!(forward.into_model(), backward.into_model());
    }

    // Tests duplicate ingestion accumulates counts
    #[test]
    fn test_duplicate_ingestion_accumulates() {
        let image = grid(&[vec![A, B], vec![C, D]]);
        let mut trainer = Trainer::new();
        trainer.ingest(&image);
        trainer.ingest(&image);

        assert_eq!(trainer.model().count(D, C), 2);
        assert_eq!(trainer.model().total_pairs(), 4);
    }

    // Tests training continues from an existing model
    #[test]
    fn test_with_model_continues() {
        let mut base = TransitionModel::new();
        base.record_edge(A, A);

        let mut trainer = Trainer::with_model(base);
        trainer.ingest(&grid(&[vec![A, B], vec![C, D]]));

        let model = trainer.into_model();
        assert_eq!(model.total_pairs(), 3);
        assert_eq!(model.count(A, A), 1);
    }
}
