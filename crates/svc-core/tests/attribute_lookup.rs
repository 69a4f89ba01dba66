mod support;

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use support::call_service;
use svc_core::model::canonicalize_value;
use svc_core::{service_attrs, service_fn, Args, Execution, Flow, Key, Service, ServiceContext, ServiceError, ServiceExt};

service_attrs!(struct Operands { service_argument_one: i64, service_argument_two: i64 });

#[derive(Debug, Default)]
struct Sum;

impl Service for Sum {
    fn call(&mut self, ctx: &mut ServiceContext) -> Flow {
        let ops = Operands::from_context(ctx)?;
        ctx.output(ops.service_argument_one + ops.service_argument_two);
        Ok(())
    }
}

#[test]
fn auxiliary_args_are_readable_as_attributes() {
    let args = Args::new().with("service_argument_one", 41).with("service_argument_two", 1);
    assert_eq!(call_service(Sum, json!({}), args), Ok(json!(42)));
}

fn echo_method_name() -> impl Service {
    service_fn(|ctx| {
        let v = ctx.attr("method_name")?.clone();
        ctx.output(v);
        Ok(())
    })
}

#[test]
fn payload_symbol_key_beats_string_key() {
    let payload = canonicalize_value(vec![(Key::text("method_name"), json!(42)), (Key::symbol("method_name"), json!(100))]);
    assert_eq!(call_service(echo_method_name(), payload, Args::new()), Ok(json!(100)));

    let payload = canonicalize_value(vec![(Key::text("k"), json!(1)), (Key::symbol("k"), json!(2))]);
    let svc = service_fn(|ctx| {
        let v = ctx.attr("k")?.clone();
        ctx.output(v);
        Ok(())
    });
    assert_eq!(call_service(svc, payload, Args::new()), Ok(json!(2)));
}

#[test]
fn payload_string_key_is_found() {
    let payload = canonicalize_value(vec![(Key::text("method_name"), json!(42))]);
    assert_eq!(call_service(echo_method_name(), payload, Args::new()), Ok(json!(42)));
}

#[test]
fn args_symbol_key_beats_string_key() {
    let args: Args = vec![(Key::text("method_name"), json!(42)), (Key::symbol("method_name"), json!(100))].into_iter()
                                                                                                     .collect();
    assert_eq!(call_service(echo_method_name(), json!({}), args), Ok(json!(100)));
}

#[test]
fn args_string_key_is_found() {
    let args: Args = vec![(Key::text("method_name"), json!(42))].into_iter().collect();
    assert_eq!(call_service(echo_method_name(), json!({}), args), Ok(json!(42)));
}

#[test]
fn args_take_precedence_over_payload_entry() {
    let svc = service_fn(|ctx| {
        let v = ctx.attr("target_method")?.clone();
        ctx.output(v);
        Ok(())
    });
    let out = call_service(svc,
                           json!({"target_method": "service_object_context"}),
                           Args::new().with("target_method", "service_object_args"));
    assert_eq!(out, Ok(json!("service_object_args")));
}

#[test]
fn payload_entry_is_read_when_args_empty() {
    let seen = Rc::new(Cell::new(false));
    let seen_in_call = seen.clone();
    let svc = service_fn(move |ctx| {
        seen_in_call.set(ctx.responds_to("target_method"));
        let v = ctx.attr("target_method")?.clone();
        ctx.output(v);
        Ok(())
    });
    let out = svc.call_with(json!({"target_method": "service_object_context"}), Args::new(), |m| m.success(|r| r));
    assert_eq!(out, Ok(json!("service_object_context")));
    assert!(seen.get());
}

#[test]
fn missing_attribute_propagates_as_fault() {
    let svc = service_fn(|ctx| {
        ctx.attr("not_existent_method")?;
        Ok(())
    });
    assert_eq!(call_service(svc, json!([]), Args::new()),
               Err(ServiceError::NoSuchAttribute("not_existent_method".into())));
}

#[test]
fn responds_to_matches_lookup_rules() {
    let with_args = Execution::new(Sum, json!({"input_key": "value"}), Args::new().with("inputs_key", "value"));
    assert!(!with_args.context().responds_to("input_key"));
    assert!(with_args.context().responds_to("inputs_key"));
    assert!(!with_args.context().responds_to("non_existent"));

    let without_args = Execution::new(Sum, json!({"input_key": "value"}), Args::new());
    assert!(without_args.context().responds_to("input_key"));
}

#[test]
fn payload_reassignment_keeps_snapshot() {
    let mut exec = Execution::new(service_fn(|ctx| {
                                      ctx.sliced(&["a"]);
                                      ctx.set_input(json!(42));
                                      Ok(())
                                  }),
                                  json!({"context": "service_object_context"}),
                                  Args::new());
    assert_eq!(exec.run(), Ok(serde_json::Value::Null));
    assert_eq!(exec.context().input(), &json!(42));
    assert_eq!(exec.context().input_snapshot(), &json!({"context": "service_object_context"}));
    assert_eq!(exec.context().default_output(), None);
}
