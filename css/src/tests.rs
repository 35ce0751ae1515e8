use super::*;

#[test]
fn test_insertion_order() {
    let classes = ClassBuilder::new()
        .flex("col")
        .justify("center")
        .items("center")
        .gap("2");
    assert_eq!(
        classes.to_list(),
        vec!["flex", "flex-col", "justify-center", "items-center", "gap-2"]
    );
    assert_eq!(
        classes.to_string(),
        "flex flex-col justify-center items-center gap-2"
    );
}

#[test]
fn test_duplicates_keep_first_position() {
    let classes = ClassBuilder::new()
        .block()
        .underline()
        .relative()
        .block()
        .underline();
    assert_eq!(classes.to_list(), vec!["block", "underline", "relative"]);

    // Second flex only contributes its new direction token
    let classes = ClassBuilder::new().flex("row").w("full").flex("col");
    assert_eq!(classes.to_list(), vec!["flex", "flex-row", "w-full", "flex-col"]);
}

#[test]
fn test_arguments_are_verbatim() {
    let classes = ClassBuilder::new()
        .w("[37px]")
        .rounded("lg")
        .cursor("pointer")
        .hover("opacity-75")
        .focus("outline-none")
        .bg("blue-400")
        .other("peer-checked:bg-blue-600");
    assert_eq!(
        classes.to_list(),
        vec![
            "w-[37px]",
            "rounded-lg",
            "cursor-pointer",
            "hover:opacity-75",
            "focus:outline-none",
            "bg-blue-400",
            "peer-checked:bg-blue-600",
        ]
    );
}

#[test]
fn test_negative_offsets() {
    let classes = ClassBuilder::new()
        .top("-2")
        .left("5")
        .z("-10")
        .translate("-x-full")
        .inset("0");
    assert_eq!(
        classes.to_list(),
        vec!["-top-2", "left-5", "-z-10", "-translate-x-full", "inset-0"]
    );
}

#[test]
fn test_spacing_is_never_negative_routed() {
    let classes = ClassBuilder::new().gap("-1").w("-px");
    assert_eq!(classes.to_list(), vec!["gap--1", "w--px"]);
}

#[test]
fn test_uniform_padding() {
    assert_eq!(ClassBuilder::new().p("2").to_list(), vec!["p-2"]);
    assert_eq!(ClassBuilder::new().m("auto").to_list(), vec!["m-auto"]);
    assert_eq!(
        ClassBuilder::new()
            .p_sides("0", Sides::new().x("3").y("3"))
            .to_list(),
        vec!["p-3"]
    );
}

#[test]
fn test_axis_padding() {
    let classes = ClassBuilder::new().p_sides("0", Sides::new().x("2").y("4"));
    assert_eq!(classes.to_list(), vec!["px-2", "py-4"]);

    let classes = ClassBuilder::new().m_sides("0", Sides::new().y("8"));
    assert_eq!(classes.to_list(), vec!["my-8"]);
}

#[test]
fn test_single_side_padding() {
    let classes = ClassBuilder::new().p_sides("0", Sides::new().l("10"));
    assert_eq!(classes.to_list(), vec!["pl-10"]);

    let classes = ClassBuilder::new().m_sides("0", Sides::new().b("1"));
    assert_eq!(classes.to_list(), vec!["mb-1"]);
}

#[test]
fn test_mixed_padding() {
    // Horizontal axis collapses, vertical does not
    let classes = ClassBuilder::new().p_sides("2", Sides::new().t("4"));
    assert_eq!(classes.to_list(), vec!["px-2", "pt-4", "pb-2"]);

    let classes = ClassBuilder::new().m_sides("1", Sides::new().l("3").r("5"));
    assert_eq!(classes.to_list(), vec!["ml-3", "mr-5", "my-1"]);
}

#[test]
fn test_zero_is_absent() {
    assert!(ClassBuilder::new().p("0").is_empty());
    let classes = ClassBuilder::new().p_sides("4", Sides::new().r("0"));
    assert_eq!(classes.to_list(), vec!["pl-4", "py-4"]);
}

#[test]
fn test_snapshot_is_detached() {
    let classes = ClassBuilder::new().block();
    let snapshot = classes.to_list();
    let classes = classes.hidden();
    assert_eq!(snapshot, vec!["block"]);
    assert_eq!(classes.len(), 2);
    assert!(classes.contains("hidden"));
}

#[test]
fn test_responsive() {
    let classes = Responsive::new(ClassBuilder::new().flex("col"))
        .at(Breakpoint::Xxl, ClassBuilder::new().gap("8"))
        .at(Breakpoint::Md, ClassBuilder::new().flex("row").p("4"));
    assert_eq!(
        classes.to_list(),
        vec![
            "flex",
            "flex-col",
            "md:flex",
            "md:flex-row",
            "md:p-4",
            "2xl:gap-8"
        ]
    );
    assert_eq!(
        classes.to_string(),
        "flex flex-col md:flex md:flex-row md:p-4 2xl:gap-8"
    );
}
