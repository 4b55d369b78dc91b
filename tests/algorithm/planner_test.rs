use family_graph::{
    FamilyError, Gender, ParentRole, PayloadRequest, RelationKind, build_relationship_payloads,
    validate_relationship_data,
};

fn summary(request: &PayloadRequest) -> Vec<(i64, i64, String, Option<ParentRole>)> {
    build_relationship_payloads(request)
        .unwrap()
        .into_iter()
        .map(|p| (p.person1_id, p.person2_id, p.type_name(), p.parent_role()))
        .collect()
}

#[test]
fn test_spouse_produces_both_directions() {
    let request = PayloadRequest::new("spouse", 1, 2).with_gender(Some(Gender::Male));

    assert_eq!(
        summary(&request),
        vec![
            (1, 2, "spouse".to_string(), None),
            (2, 1, "spouse".to_string(), None),
        ]
    );
}

#[test]
fn test_child_with_ambiguous_gender_is_rejected() {
    let request = PayloadRequest::new("child", 1, 2).with_gender(Some(Gender::Other));

    assert!(matches!(
        build_relationship_payloads(&request),
        Err(FamilyError::AmbiguousParentRole)
    ));

    let request = request.with_parent_role(ParentRole::Mother);
    assert_eq!(
        summary(&request),
        vec![(1, 2, "mother".to_string(), Some(ParentRole::Mother))]
    );
}

#[test]
fn test_child_role_from_gender() {
    let request = PayloadRequest::new("child", 5, 6).with_gender(Some(Gender::Male));
    assert_eq!(
        summary(&request),
        vec![(5, 6, "father".to_string(), Some(ParentRole::Father))]
    );
}

#[test]
fn test_selected_role_overrides_gender() {
    let request = PayloadRequest::new("child", 5, 6)
        .with_gender(Some(Gender::Male))
        .with_parent_role(ParentRole::Mother);
    assert_eq!(
        summary(&request),
        vec![(5, 6, "mother".to_string(), Some(ParentRole::Mother))]
    );
}

#[test]
fn test_new_parent_is_person_one() {
    let mother = PayloadRequest::new("mother", 1, 9);
    let father = PayloadRequest::new("father", 1, 9).with_gender(Some(Gender::Female));

    assert_eq!(
        summary(&mother),
        vec![(9, 1, "mother".to_string(), Some(ParentRole::Mother))]
    );
    assert_eq!(
        summary(&father),
        vec![(9, 1, "father".to_string(), Some(ParentRole::Father))]
    );
}

#[test]
fn test_invalid_type_and_missing_ids() {
    let invalid = PayloadRequest::new("cousin", 1, 2);
    let err = build_relationship_payloads(&invalid).unwrap_err();
    assert!(err.to_string().starts_with("Invalid relationship type"));
    assert!(err.is_invalid_input());

    let missing = PayloadRequest {
        relationship_type: "spouse".to_string(),
        focus_person_id: Some(1),
        ..Default::default()
    };
    let err = build_relationship_payloads(&missing).unwrap_err();
    assert_eq!(err.to_string(), "Missing required parameters");
}

#[test]
fn test_validate_does_not_fail() {
    let ok = validate_relationship_data(&PayloadRequest::new("spouse", 1, 2));
    assert!(ok.valid);
    assert!(ok.error.is_none());

    let ambiguous = validate_relationship_data(&PayloadRequest::new("child", 1, 2));
    assert!(!ambiguous.valid);
    assert!(ambiguous.error.is_some());
}

#[test]
fn test_payload_kinds_and_wire_shape() {
    let payloads =
        build_relationship_payloads(&PayloadRequest::new("spouse", 1, 2)).unwrap();
    assert!(payloads.iter().all(|p| p.kind == RelationKind::Spouse));

    let value = serde_json::to_value(&payloads[0]).unwrap();
    assert_eq!(value["person1Id"], 1);
    assert_eq!(value["person2Id"], 2);
    assert_eq!(value["type"], "spouse");
    assert!(value["parentRole"].is_null());
}

#[test]
fn test_request_from_ui_json() {
    let request: PayloadRequest = serde_json::from_str(
        r#"{"relationshipType":"child","focusPersonId":3,"newPersonId":4,"focusPersonGender":"female"}"#,
    )
    .unwrap();

    assert_eq!(
        summary(&request),
        vec![(3, 4, "mother".to_string(), Some(ParentRole::Mother))]
    );
}

#[test]
fn test_abbreviated_gender_does_not_imply_a_role() {
    let request: PayloadRequest = serde_json::from_str(
        r#"{"relationshipType":"child","focusPersonId":3,"newPersonId":4,"focusPersonGender":"m"}"#,
    )
    .unwrap();

    assert_eq!(request.focus_person_gender, Some(Gender::Other));
    assert!(matches!(
        build_relationship_payloads(&request),
        Err(FamilyError::AmbiguousParentRole)
    ));
}
