#[cfg(test)]
mod tests {
    use noise_injection_tool::data::{
        generator::SequenceGenerator,
        limits::Limit,
        noise::{NoiseInjector, StepRange},
        table::{Column, Dataset},
        widen, Cell,
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn clean_sequence(rng: &mut StdRng) -> Vec<Cell> {
        // [1, 10) keeps the values disjoint from both ambiguous domains, so
        // every corruption below is observable.
        let generator = SequenceGenerator::new(200, &[Limit::Int(1), Limit::Int(10)]);
        widen(&generator.generate(rng).unwrap())
    }

    #[test]
    fn test_single_noise_pass_counts() {
        let mut rng = StdRng::seed_from_u64(42);
        let clean = clean_sequence(&mut rng);

        let injector = NoiseInjector::new(StepRange::new(0, -5, -1), 0.15);
        let noisy = injector.inject(&mut rng, &clean).unwrap();

        assert_eq!(noisy.len(), 200);

        let changed: Vec<Cell> = clean
            .iter()
            .zip(noisy.iter())
            .filter(|(before, after)| before != after)
            .map(|(_, &after)| after)
            .collect();
        assert_eq!(changed.len(), 30);

        let missing = changed.iter().filter(|c| c.is_missing()).count();
        assert_eq!(missing, 7);

        for cell in changed.iter().filter(|c| !c.is_missing()) {
            let value = cell.value().unwrap();
            assert!((-4.0..=0.0).contains(&value));
            assert_eq!(value.fract(), 0.0);
        }
    }

    #[test]
    fn test_double_noise_pass_keeps_shape_and_domains() {
        let mut rng = StdRng::seed_from_u64(1521);
        let clean = clean_sequence(&mut rng);
        let snapshot = clean.clone();

        let negative = NoiseInjector::new(StepRange::new(0, -5, -1), 0.15);
        let positive = NoiseInjector::new(StepRange::new(11, 25, 1), 0.15);
        let noisy = negative.inject(&mut rng, &clean).unwrap();
        let noisy = positive.inject(&mut rng, &noisy).unwrap();

        assert_eq!(clean, snapshot);
        assert_eq!(noisy.len(), 200);

        // Each pass marks 7 of its 30 indices missing; the second pass may
        // overwrite missing cells from the first.
        let missing = noisy.iter().filter(|c| c.is_missing()).count();
        assert!((7..=14).contains(&missing));

        for cell in noisy.iter().filter(|c| !c.is_missing()) {
            let value = cell.value().unwrap();
            let generated = (1.0..10.0).contains(&value);
            let negative_noise = (-4.0..=0.0).contains(&value);
            let positive_noise = (11.0..25.0).contains(&value);
            assert!(generated || negative_noise || positive_noise);
        }
    }

    #[test]
    fn test_pipeline_writes_the_expected_csv() {
        let mut rng = StdRng::seed_from_u64(7890);

        let negative = NoiseInjector::new(StepRange::new(0, -5, -1), 0.15);
        let positive = NoiseInjector::new(StepRange::new(11, 25, 1), 0.15);

        let clean_hours = clean_sequence(&mut rng);
        let hours = negative.inject(&mut rng, &clean_hours).unwrap();
        let hours = positive.inject(&mut rng, &hours).unwrap();
        let clean_marks = clean_sequence(&mut rng);
        let marks = negative.inject(&mut rng, &clean_marks).unwrap();
        let marks = positive.inject(&mut rng, &marks).unwrap();

        let expected_missing = hours.iter().filter(|c| c.is_missing()).count()
            + marks.iter().filter(|c| c.is_missing()).count();

        let dataset = Dataset::new(vec![
            Column::new("Hours", hours),
            Column::new("marks", marks),
        ])
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study_data.csv");
        dataset.to_csv_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Hours,marks"));

        let mut rows = 0;
        let mut empty_fields = 0;
        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 2);
            empty_fields += fields.iter().filter(|f| f.is_empty()).count();
            rows += 1;
        }
        assert_eq!(rows, 200);
        assert_eq!(empty_fields, expected_missing);
    }
}
