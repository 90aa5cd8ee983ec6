use stackdedupe::aggregator::{dedupe_stacks, filter_groups, signature, Group};
use stackdedupe::parser::{parse_stack, Call, Creator, Location, Stack};

fn call(name: &str, filename: &str, line: u64, args: &str) -> Call {
    Call {
        name: name.to_string(),
        args: args.to_string(),
        location: Some(Location {
            filename: filename.to_string(),
            line,
        }),
    }
}

fn stack_with(goroutine_id: u64, reason: &str, calls: Vec<Call>) -> Stack {
    Stack {
        goroutine_id,
        reason: reason.to_string(),
        delay: None,
        calls,
        creator: None,
        raw_lines: vec![format!("goroutine {} [{}]:", goroutine_id, reason)],
    }
}

#[test]
fn test_signature_ignores_instance_fields() {
    let a = stack_with(1, "chan receive", vec![call("main.f", "/a.go", 3, "0x1")]);
    let mut b = stack_with(99, "select", vec![call("main.f", "/a.go", 3, "0xdead, 0xbeef")]);
    b.delay = Some("10 minutes".to_string());
    b.creator = Some(Creator {
        name: "main.spawn".to_string(),
        origin_goroutine: 7,
        location: None,
    });
    b.raw_lines.push("extra".to_string());

    assert_eq!(signature(&a), signature(&b));
}

#[test]
fn test_signature_depends_on_frame_order() {
    let a = stack_with(
        1,
        "select",
        vec![call("main.f", "/a.go", 1, ""), call("main.g", "/a.go", 2, "")],
    );
    let b = stack_with(
        1,
        "select",
        vec![call("main.g", "/a.go", 2, ""), call("main.f", "/a.go", 1, "")],
    );

    assert_ne!(signature(&a), signature(&b));
}

#[test]
fn test_n_duplicates_make_one_group() {
    let stacks: Vec<Stack> = (1..=5)
        .map(|id| stack_with(id, "chan send", vec![call("main.f", "/a.go", 3, "")]))
        .collect();

    let groups = dedupe_stacks(stacks);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].variants.len(), 4);
    assert_eq!(groups[0].count(), 5);
}

#[test]
fn test_distinct_signatures_make_distinct_groups() {
    let groups = dedupe_stacks(vec![
        stack_with(3, "select", vec![call("main.f", "/a.go", 3, "")]),
        stack_with(1, "select", vec![call("main.f", "/a.go", 4, "")]),
        stack_with(2, "select", vec![call("main.f", "/a.go", 3, "")]),
    ]);

    let ids: Vec<u64> = groups.iter().map(|g| g.representative.goroutine_id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(groups[1].variants[0].goroutine_id, 2);
}

#[test]
fn test_filter_drops_idle_groups() {
    let reasons = [
        "idle",
        "runnable, (idle) waiting",
        "GC worker (idle)",
        "finalizer wait",
        "chan receive",
    ];
    let groups: Vec<Group> = reasons
        .iter()
        .enumerate()
        .map(|(i, reason)| {
            Group::new(stack_with(
                i as u64,
                reason,
                vec![call("main.f", "/a.go", i as u64, "")],
            ))
        })
        .collect();

    let kept = filter_groups(groups);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].representative.reason, "chan receive");
}

#[test]
fn test_filter_only_looks_at_representative() {
    let mut group = Group::new(stack_with(1, "select", vec![]));
    group.variants.push(stack_with(2, "idle", vec![]));

    let kept = filter_groups(vec![group]);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].count(), 2);
}

#[test]
fn test_parsed_stacks_group_across_args() {
    let a = parse_stack(&["goroutine 4 [IO wait]:", "net.poll(0x1)", "\t/net/fd.go:88 +0x2"]).unwrap();
    let b = parse_stack(&["goroutine 5 [IO wait, 2 minutes]:", "net.poll(0x7)", "\t/net/fd.go:88 +0x9"])
        .unwrap();

    let groups = dedupe_stacks(vec![a, b]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].representative.goroutine_id, 4);
}
