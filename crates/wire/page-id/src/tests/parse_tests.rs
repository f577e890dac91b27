use crate::page_id::PageId;
use property::PropertyValue;

#[test]
fn parses_decimal() {
    assert_eq!("1001".parse::<PageId>().unwrap(), PageId::new(1001));
    assert_eq!(" 0 \n".parse::<PageId>().unwrap(), PageId::new(0));
}

#[test]
fn blank_parses_as_unset() {
    assert_eq!("".parse::<PageId>().unwrap(), PageId::unset());
    assert_eq!("   ".parse::<PageId>().unwrap(), PageId::unset());
}

#[test]
fn rejects_non_numeric() {
    let err = "home".parse::<PageId>().unwrap_err();
    assert_eq!(err.input, "home");
    assert!(err.to_string().starts_with("invalid page id `home`"));

    assert!("-1".parse::<PageId>().is_err());
    assert!("1.5".parse::<PageId>().is_err());
}

#[test]
fn display_output_parses_back() {
    for id in [PageId::new(0), PageId::new(1001), PageId::unset()] {
        assert_eq!(id.to_string().parse::<PageId>().unwrap(), id);
    }
}

#[test]
fn option_conversions() {
    assert_eq!(PageId::from(5), PageId::new(5));
    assert_eq!(PageId::from(None), PageId::unset());
    assert_eq!(Option::<u64>::from(PageId::new(9)), Some(9));
    assert_eq!(Option::<u64>::from(PageId::unset()), None);
}

#[test]
fn property_value_conversions() {
    assert_eq!(PropertyValue::from(PageId::new(3)), PropertyValue::Int(3));
    assert_eq!(PropertyValue::from(PageId::unset()), PropertyValue::Null);

    assert_eq!(PageId::try_from(&PropertyValue::Int(3)).unwrap(), PageId::new(3));
    assert_eq!(PageId::try_from(&PropertyValue::from("44")).unwrap(), PageId::new(44));
    assert_eq!(PageId::try_from(&PropertyValue::Null).unwrap(), PageId::unset());
    assert!(PageId::try_from(&PropertyValue::Int(-2)).is_err());
}

#[test]
fn unset_sorts_first() {
    let mut ids = vec![PageId::new(10), PageId::unset(), PageId::new(2)];
    ids.sort();
    assert_eq!(ids, vec![PageId::unset(), PageId::new(2), PageId::new(10)]);
}
