//! Resource expansion against a real table: catalog order, narrowing,
//! id-token substitution, and the atomicity of a failed expansion.

use hyper::Method;
use pressoir_routes::{
	MethodSet, ResourceOptions, RouteError, RouteOptions, RouteTable,
};
use rstest::rstest;
use serde_json::json;

fn table() -> RouteTable {
	RouteTable::new("shop", "v1")
}

#[rstest]
fn test_only_restricts_to_named_actions() {
	// Arrange
	let mut table = table();

	// Act
	table
		.resource(
			"widgets",
			"WidgetController",
			ResourceOptions::new().only(["index", "show"]),
		)
		.unwrap();

	// Assert
	let routes = table.routes();
	assert_eq!(routes.len(), 2);

	assert_eq!(routes[0].pattern(), "widgets");
	assert_eq!(routes[0].methods(), &MethodSet::get());
	assert_eq!(
		routes[0].target().controller_ref(),
		Some(("WidgetController", "index"))
	);

	assert_eq!(routes[1].pattern(), "widgets/{id}");
	assert_eq!(routes[1].methods(), &MethodSet::get());
	assert_eq!(
		routes[1].target().controller_ref(),
		Some(("WidgetController", "show"))
	);
}

#[rstest]
fn test_except_drops_actions_but_keeps_catalog_order() {
	// Arrange
	let mut table = table();

	// Act
	table
		.resource(
			"widgets",
			"WidgetController",
			ResourceOptions::new().except(["destroy"]),
		)
		.unwrap();

	// Assert
	let actions: Vec<&str> = table
		.routes()
		.iter()
		.map(|route| route.target().controller_ref().unwrap().1)
		.collect();
	assert_eq!(actions, ["index", "create", "store", "show", "edit", "update"]);

	let patterns: Vec<&str> = table.routes().iter().map(|route| route.pattern()).collect();
	assert_eq!(
		patterns,
		[
			"widgets",
			"widgets/create",
			"widgets",
			"widgets/{id}",
			"widgets/{id}/edit",
			"widgets/{id}",
		]
	);
}

#[rstest]
fn test_full_catalog_verb_assignments() {
	// Arrange
	let mut table = table();

	// Act
	table
		.resource("widgets", "WidgetController", ResourceOptions::new())
		.unwrap();

	// Assert
	let routes = table.routes();
	assert_eq!(routes.len(), 7);
	assert_eq!(routes[2].methods(), &MethodSet::post());
	assert_eq!(
		routes[5].methods(),
		&MethodSet::of([Method::PUT, Method::PATCH])
	);
	assert_eq!(routes[6].methods(), &MethodSet::delete());
}

#[rstest]
fn test_unknown_action_fails_without_declaring_anything() {
	// Arrange
	let mut table = table();
	table
		.get("status", "StatusController@show", RouteOptions::new())
		.unwrap();

	// Act: "upsert" is validated before any catalog route lands
	let error = table
		.resource(
			"widgets",
			"WidgetController",
			ResourceOptions::new().only(["index", "upsert"]),
		)
		.unwrap_err();

	// Assert
	assert!(matches!(error, RouteError::UnknownAction(name) if name == "upsert"));
	assert_eq!(table.routes().len(), 1);
	assert_eq!(table.routes()[0].pattern(), "status");
}

#[rstest]
fn test_api_registers_the_five_action_subset() {
	// Arrange
	let mut table = table();

	// Act
	table
		.api("widgets", "WidgetController", ResourceOptions::new())
		.unwrap();

	// Assert: create and edit, the form-serving actions, are absent
	let actions: Vec<&str> = table
		.routes()
		.iter()
		.map(|route| route.target().controller_ref().unwrap().1)
		.collect();
	assert_eq!(actions, ["index", "show", "store", "update", "destroy"]);
}

#[rstest]
fn test_api_defers_to_an_explicit_only_list() {
	// Arrange
	let mut table = table();

	// Act
	table
		.api(
			"widgets",
			"WidgetController",
			ResourceOptions::new().only(["index"]),
		)
		.unwrap();

	// Assert
	assert_eq!(table.routes().len(), 1);
	assert_eq!(
		table.routes()[0].target().controller_ref(),
		Some(("WidgetController", "index"))
	);
}

#[rstest]
fn test_custom_id_string_threads_through_patterns() {
	// Arrange
	let mut table = table();

	// Act
	table
		.resource(
			"widgets",
			"WidgetController",
			ResourceOptions::new()
				.only(["show", "edit"])
				.id_string("{widget_slug}"),
		)
		.unwrap();

	// Assert
	assert_eq!(table.routes()[0].pattern(), "widgets/{widget_slug}");
	assert_eq!(table.routes()[1].pattern(), "widgets/{widget_slug}/edit");
	assert_eq!(table.routes()[0].compiled().param_names(), ["widget_slug"]);
}

#[rstest]
fn test_index_and_show_carry_their_default_args() {
	// Arrange
	let mut table = table();

	// Act
	table
		.resource(
			"widgets",
			"WidgetController",
			ResourceOptions::new().only(["index", "show"]),
		)
		.unwrap();

	// Assert: collection route gets the paging schema
	let index_args = &table.routes()[0].options().args;
	assert_eq!(index_args["order"].default, Some(json!("asc")));
	assert_eq!(index_args["page"].default, Some(json!(1)));
	assert_eq!(index_args["per_page"].default, Some(json!(10)));
	assert_eq!(index_args["orderby"].default, Some(json!("title")));

	// Assert: item route gets the fields selector
	let show_args = &table.routes()[1].options().args;
	assert!(show_args.contains_key("fields"));
	assert!(!show_args.contains_key("page"));
}

#[rstest]
fn test_route_options_forward_to_every_expanded_route() {
	// Arrange
	let mut table = table();

	// Act
	table
		.resource(
			"widgets",
			"WidgetController",
			ResourceOptions::new()
				.only(["index", "store"])
				.route_options(RouteOptions::new().with_extra("show_in_index", false)),
		)
		.unwrap();

	// Assert
	for route in table.routes() {
		assert_eq!(route.options().extra["show_in_index"], json!(false));
	}
}
