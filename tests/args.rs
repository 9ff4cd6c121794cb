use codemap::{CodeMap, Span};

use sass_ast::{
    Argument, Arguments, AstCallableDecl, AstInclude, Block, CallableKind, OrderingViolation,
    Parameter, Parameters, Value, ValueKind,
};

fn span() -> Span {
    let mut map = CodeMap::new();
    map.add_file(
        "test.scss".to_owned(),
        "@mixin foo($a, $b: 1, $rest...) {}\n".to_owned(),
    )
    .span
}

fn number(n: f64) -> Value {
    Value::new(ValueKind::Number(n), span())
}

fn required(name: &str) -> Parameter {
    Parameter {
        name: name.into(),
        default: None,
        is_rest: false,
        span: span(),
    }
}

fn optional(name: &str, default: f64) -> Parameter {
    Parameter {
        name: name.into(),
        default: Some(number(default)),
        is_rest: false,
        span: span(),
    }
}

fn rest(name: &str) -> Parameter {
    Parameter {
        name: name.into(),
        default: None,
        is_rest: true,
        span: span(),
    }
}

fn positional(n: f64) -> Argument {
    Argument {
        value: number(n),
        name: None,
        is_rest: false,
        span: span(),
    }
}

fn named(name: &str, n: f64) -> Argument {
    Argument {
        value: number(n),
        name: Some(name.into()),
        is_rest: false,
        span: span(),
    }
}

fn rest_arg(n: f64) -> Argument {
    Argument {
        value: number(n),
        name: None,
        is_rest: true,
        span: span(),
    }
}

#[test]
fn required_optional_rest_in_order_succeeds() {
    let mut params = Parameters::new(span());
    params.push(required("a")).unwrap();
    params.push(optional("b", 1.0)).unwrap();
    params.push(rest("rest")).unwrap();

    assert_eq!(params.len(), 3);
    assert!(params.has_optional_parameters());
    assert!(params.has_rest_parameter());
    assert_eq!(params[1].name, "b".into());
}

#[test]
fn required_after_rest_is_rejected() {
    let mut params = Parameters::new(span());
    params.push(required("a")).unwrap();
    params.push(optional("b", 1.0)).unwrap();
    params.push(rest("rest")).unwrap();

    let err = params.push(required("c")).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ParameterAfterRest));
    assert_eq!(err.index(), Some(3));
    assert!(err.message().contains("$c"));
}

#[test]
fn required_after_optional_is_rejected() {
    let mut params = Parameters::new(span());
    params.push(optional("a", 1.0)).unwrap();

    let err = params.push(required("b")).unwrap_err();
    assert_eq!(
        err.violation(),
        Some(OrderingViolation::RequiredAfterOptional)
    );
}

#[test]
fn optional_after_rest_is_rejected() {
    let mut params = Parameters::new(span());
    params.push(rest("rest")).unwrap();

    let err = params.push(optional("a", 1.0)).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ParameterAfterRest));
}

#[test]
fn second_rest_parameter_is_rejected() {
    let mut params = Parameters::new(span());
    params.push(rest("rest")).unwrap();

    let err = params.push(rest("more")).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ParameterAfterRest));
}

#[test]
fn defaulted_rest_parameter_is_rejected() {
    let mut params = Parameters::new(span());
    let mut bad = rest("rest");
    bad.default = Some(number(1.0));

    let err = params.push(bad).unwrap_err();
    assert_eq!(
        err.violation(),
        Some(OrderingViolation::DefaultOnRestParameter)
    );
}

#[test]
fn failed_append_leaves_parameters_untouched() {
    let mut params = Parameters::new(span());
    params.push(optional("a", 1.0)).unwrap();

    assert!(params.push(required("b")).is_err());
    assert_eq!(params.len(), 1);
    assert!(!params.has_rest_parameter());
}

#[test]
fn positional_then_named_succeeds() {
    let mut args = Arguments::new(span());
    args.push(positional(1.0)).unwrap();
    args.push(positional(2.0)).unwrap();
    args.push(named("key", 3.0)).unwrap();

    assert_eq!(args.len(), 3);
    assert!(args.has_named_arguments());
    assert!(!args.has_rest_argument());
}

#[test]
fn positional_after_named_is_rejected() {
    let mut args = Arguments::new(span());
    args.push(positional(1.0)).unwrap();
    args.push(named("key", 3.0)).unwrap();

    let err = args.push(positional(4.0)).unwrap_err();
    assert_eq!(
        err.violation(),
        Some(OrderingViolation::PositionalAfterNamed)
    );
    assert_eq!(err.index(), Some(2));
}

#[test]
fn rest_after_named_is_allowed() {
    let mut args = Arguments::new(span());
    args.push(named("key", 3.0)).unwrap();
    args.push(rest_arg(4.0)).unwrap();

    assert!(args.has_rest_argument());
}

#[test]
fn anything_after_rest_argument_is_rejected() {
    let mut args = Arguments::new(span());
    args.push(rest_arg(1.0)).unwrap();

    let err = args.push(positional(2.0)).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ArgumentAfterRest));

    let err = args.push(named("key", 3.0)).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ArgumentAfterRest));

    let err = args.push(rest_arg(4.0)).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ArgumentAfterRest));
}

#[test]
fn named_rest_argument_is_rejected() {
    let mut args = Arguments::new(span());
    let mut bad = rest_arg(1.0);
    bad.name = Some("key".into());

    let err = args.push(bad).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::NamedRestArgument));
}

#[test]
fn empty_argument_name_is_rejected() {
    let mut args = Arguments::new(span());

    let err = args.push(named("", 1.0)).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::EmptyArgumentName));
}

#[test]
fn failed_append_leaves_arguments_untouched() {
    let mut args = Arguments::new(span());
    args.push(named("key", 1.0)).unwrap();

    assert!(args.push(positional(2.0)).is_err());
    assert_eq!(args.len(), 1);
}

#[test]
fn parameter_concatenation_revalidates_ordering() {
    let mut front = Parameters::new(span());
    front.push(required("a")).unwrap();

    let mut back = Parameters::new(span());
    back.push(optional("b", 1.0)).unwrap();
    back.push(rest("rest")).unwrap();

    front.append(back).unwrap();
    assert_eq!(front.len(), 3);
    assert!(front.has_optional_parameters());
    assert!(front.has_rest_parameter());
}

#[test]
fn invalid_parameter_concatenation_is_atomic() {
    let mut front = Parameters::new(span());
    front.push(optional("a", 1.0)).unwrap();

    // valid on its own, invalid once appended after an optional parameter
    let mut back = Parameters::new(span());
    back.push(required("b")).unwrap();

    let err = front.append(back).unwrap_err();
    assert_eq!(
        err.violation(),
        Some(OrderingViolation::RequiredAfterOptional)
    );
    assert_eq!(err.index(), Some(1));
    assert_eq!(front.len(), 1);
}

#[test]
fn argument_concatenation_revalidates_ordering() {
    let mut front = Arguments::new(span());
    front.push(positional(1.0)).unwrap();

    let mut back = Arguments::new(span());
    back.push(named("key", 2.0)).unwrap();
    back.push(rest_arg(3.0)).unwrap();

    front.append(back).unwrap();
    assert_eq!(front.len(), 3);
    assert!(front.has_named_arguments());
    assert!(front.has_rest_argument());

    let mut positional_tail = Arguments::new(span());
    positional_tail.push(positional(4.0)).unwrap();
    let err = front.append(positional_tail).unwrap_err();
    assert_eq!(err.violation(), Some(OrderingViolation::ArgumentAfterRest));
    assert_eq!(front.len(), 3);
}

#[test]
fn located_error_reports_file_and_line() {
    let mut map = CodeMap::new();
    let file = map.add_file(
        "widgets.scss".to_owned(),
        "@mixin foo($a: 1, $b) {}\n".to_owned(),
    );

    let mut params = Parameters::new(file.span);
    params
        .push(Parameter {
            name: "a".into(),
            default: Some(Value::new(ValueKind::Number(1.0), file.span.subspan(15, 16))),
            is_rest: false,
            span: file.span.subspan(11, 16),
        })
        .unwrap();

    let err = params
        .push(Parameter {
            name: "b".into(),
            default: None,
            is_rest: false,
            span: file.span.subspan(18, 20),
        })
        .unwrap_err();

    let rendered = err.with_loc(&map).to_string();
    assert!(rendered.contains("widgets.scss:1:19"));
    assert!(rendered.contains("$b"));
}

#[test]
fn definition_and_call_share_parameter_shapes() {
    let sp = span();

    let mut params = Parameters::new(sp);
    params.push(required("a")).unwrap();
    params.push(rest("rest")).unwrap();

    let decl = AstCallableDecl {
        kind: CallableKind::Mixin,
        name: "foo".into(),
        parameters: params,
        body: Block::new(sp),
        span: sp,
    };

    let mut args = Arguments::new(sp);
    args.push(positional(1.0)).unwrap();
    args.push(rest_arg(2.0)).unwrap();

    let call = AstInclude {
        name: "foo".into(),
        arguments: args,
        content: Some(Block::new(sp)),
        span: sp,
    };

    assert_eq!(decl.kind, CallableKind::Mixin);
    assert_eq!(decl.parameters.len(), call.arguments.len());
    assert!(decl.parameters.has_rest_parameter());
    assert!(call.arguments.has_rest_argument());
    assert!(call.content.is_some());
}
