use crate::{prelude::*, schema::*};
use std::cell::RefCell;
use varstruct::obs::{self, AssignEvent, AssignSink};

#[derive(Default)]
struct CaptureSink {
    events: RefCell<Vec<AssignEvent>>,
}

impl AssignSink for CaptureSink {
    fn record(&self, event: AssignEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn counters_track_accepted_and_rejected() {
    obs::assign_reset();

    let mut base = Base::default();
    base.set::<{ id!("field1") }, _>(1u8);
    base.set::<{ id!("field1") }, _>(-1i8);
    base.set::<{ id!("field1") }, _>(70_000u32);

    let report = obs::assign_report();
    let field1 = report.field(Base::PATH, "field1").unwrap();

    assert_eq!((report.accepted, report.rejected), (1, 2));
    assert_eq!((field1.accepted, field1.rejected), (1, 2));
    assert!(report.field(Base::PATH, "field0").is_none());
}

#[test]
fn same_field_name_in_unrelated_structs_is_counted_apart() {
    obs::assign_reset();

    let mut base = Base::default();
    let mut narrow = Narrow::default();
    base.set::<{ id!("field1") }, _>(1u8);
    narrow.set::<{ id!("field1") }, _>(300u16);

    let report = obs::assign_report();
    let wide = report.field(Base::PATH, "field1").unwrap();
    let slim = report.field(Narrow::PATH, "field1").unwrap();

    assert_ne!(Base::PATH, Narrow::PATH);
    assert_eq!((wide.accepted, wide.rejected), (1, 0));
    assert_eq!((slim.accepted, slim.rejected), (0, 1));
    assert_eq!(report.fields_named("field1").count(), 2);
}

#[test]
fn inherited_fields_report_their_declaring_struct() {
    obs::assign_reset();

    let mut grand = GrandChild::default();
    grand.set::<{ id!("field1") }, _>(2u8);

    let report = obs::assign_report();

    assert_eq!(
        report.field(Base::PATH, "field1").map(|c| c.accepted),
        Some(1)
    );
    assert!(report.field(GrandChild::PATH, "field1").is_none());
    assert_eq!(
        grand.field::<{ id!("field1") }, _>().spec().owner(),
        Base::PATH
    );
}

#[test]
fn scoped_sink_sees_every_event() {
    obs::assign_reset();

    let sink = CaptureSink::default();
    let mut counter = Counter::default();
    obs::with_assign_sink(&sink, || {
        counter.set::<{ id!("hits") }, _>(300u16);
        counter.set::<{ id!("misses") }, _>(-2i8);
    });

    let events = sink.events.into_inner();
    assert_eq!(
        events,
        [
            AssignEvent::Rejected {
                owner: Counter::PATH,
                field: "hits",
                value_type: "u8",
            },
            AssignEvent::Accepted {
                owner: Counter::PATH,
                field: "misses",
                value_type: "i8",
            },
        ]
    );
    assert_eq!(obs::assign_report().accepted, 0);
}

#[test]
fn construction_does_not_record() {
    obs::assign_reset();

    let _ = Child::new((Init::Default, 1u16, "x"));
    let _ = Child::default_initialized();

    assert_eq!(obs::assign_report(), obs::AssignReport::default());
}
