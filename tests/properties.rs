use proptest::prelude::*;
use resale_inflation::{
    filter_rows, join,
    reader::parse_table,
    writer::serialize_table,
    InflationIndex, Row, Table, TableError,
};
use std::collections::HashMap;

fn month() -> impl Strategy<Value = String> {
    (2015u32..2022, 1u32..13).prop_map(|(y, m)| format!("{}-{:02}", y, m))
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,\"]{0,8}"
}

fn inflation_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (month(), "[0-9]\\.[0-9]").prop_map(|(m, r)| vec![m, r]),
        1..20,
    )
}

fn row_with_month(months: Vec<String>) -> impl Strategy<Value = Row> {
    (prop::sample::select(months), prop::collection::vec(text(), 0..4)).prop_map(
        |(m, rest)| {
            let mut row = vec![m];
            row.extend(rest);
            row
        },
    )
}

proptest! {
    #[test]
    fn join_appends_last_written_rate(
        (inflation, prices) in inflation_table().prop_flat_map(|t| {
            let months: Vec<String> = t.iter().map(|r| r[0].clone()).collect();
            (Just(t), prop::collection::vec(row_with_month(months), 0..20))
        })
    ) {
        let mut last = HashMap::new();
        for r in &inflation {
            last.insert(r[0].clone(), r[1].clone());
        }

        let index = InflationIndex::from_table(&inflation).unwrap();
        let joined = join(&index, prices.clone()).unwrap();

        prop_assert_eq!(joined.len(), prices.len());
        for (out, input) in joined.iter().zip(&prices) {
            prop_assert_eq!(out.len(), input.len() + 1);
            prop_assert_eq!(&out[..input.len()], &input[..]);
            prop_assert_eq!(&out[input.len()], &last[&input[0]]);
        }
    }

    #[test]
    fn join_fails_on_any_unknown_month(
        inflation in inflation_table(),
        position in 0usize..10,
    ) {
        let index = InflationIndex::from_table(&inflation).unwrap();
        let mut prices: Table = inflation.iter().map(|r| vec![r[0].clone(), "1".into()]).collect();
        let at = position.min(prices.len());
        prices.insert(at, vec!["1999-13".into(), "1".into()]);

        let missing_row = matches!(
            join(&index, prices),
            Err(TableError::MissingKey { ref month, row }) if month == "1999-13" && row == at
        );
        prop_assert!(missing_row);
    }

    #[test]
    fn filter_keeps_only_matches_after_header(
        table in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["3 ROOM", "4 ROOM", "3 room", ""]), 2..4)
                .prop_map(|r| r.into_iter().map(String::from).collect::<Row>()),
            1..30,
        )
    ) {
        let filtered = filter_rows(&table, 1, "3 ROOM").unwrap();
        let expected: Table = table[1..].iter().filter(|r| r[1] == "3 ROOM").cloned().collect();

        prop_assert!(filtered.len() <= table.len() - 1);
        prop_assert!(filtered.iter().all(|r| r[1] == "3 ROOM"));
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn written_tables_read_back_equal(
        table in prop::collection::vec(
            (month(), prop::collection::vec(text(), 0..5)).prop_map(|(m, rest)| {
                let mut row = vec![m];
                row.extend(rest);
                row
            }),
            0..20,
        )
    ) {
        let bytes = serialize_table(&table).unwrap();
        prop_assert_eq!(parse_table(&bytes).unwrap(), table);
    }
}
