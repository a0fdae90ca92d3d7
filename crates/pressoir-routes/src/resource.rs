//! Resource action catalog and expansion options.

use std::collections::BTreeMap;

use hyper::Method;

use crate::error::RouteError;
use crate::methods::MethodSet;
use crate::options::{ArgSchema, RouteOptions, comma_list};

/// Conventional CRUD actions a resource expands into, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAction {
	Index,
	Create,
	Store,
	Show,
	Edit,
	Update,
	Destroy,
}

impl ResourceAction {
	/// The full catalog in expansion order.
	pub const CATALOG: [ResourceAction; 7] = [
		ResourceAction::Index,
		ResourceAction::Create,
		ResourceAction::Store,
		ResourceAction::Show,
		ResourceAction::Edit,
		ResourceAction::Update,
		ResourceAction::Destroy,
	];

	/// The subset `api` registers when the caller does not narrow it.
	pub const API_SUBSET: [ResourceAction; 5] = [
		ResourceAction::Index,
		ResourceAction::Show,
		ResourceAction::Store,
		ResourceAction::Update,
		ResourceAction::Destroy,
	];

	pub fn name(self) -> &'static str {
		match self {
			ResourceAction::Index => "index",
			ResourceAction::Create => "create",
			ResourceAction::Store => "store",
			ResourceAction::Show => "show",
			ResourceAction::Edit => "edit",
			ResourceAction::Update => "update",
			ResourceAction::Destroy => "destroy",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"index" => Some(ResourceAction::Index),
			"create" => Some(ResourceAction::Create),
			"store" => Some(ResourceAction::Store),
			"show" => Some(ResourceAction::Show),
			"edit" => Some(ResourceAction::Edit),
			"update" => Some(ResourceAction::Update),
			"destroy" => Some(ResourceAction::Destroy),
			_ => None,
		}
	}

	/// Fixed verb set for the action.
	pub fn methods(self) -> MethodSet {
		match self {
			ResourceAction::Index
			| ResourceAction::Create
			| ResourceAction::Show
			| ResourceAction::Edit => MethodSet::get(),
			ResourceAction::Store => MethodSet::post(),
			ResourceAction::Update => MethodSet::of([Method::PUT, Method::PATCH]),
			ResourceAction::Destroy => MethodSet::delete(),
		}
	}

	/// Path suffix template; `%s` is replaced with the id token.
	pub fn suffix(self) -> &'static str {
		match self {
			ResourceAction::Index | ResourceAction::Store => "",
			ResourceAction::Create => "/create",
			ResourceAction::Show | ResourceAction::Update | ResourceAction::Destroy => "/%s",
			ResourceAction::Edit => "/%s/edit",
		}
	}

	/// Argument schemas merged onto every route declared for the action.
	pub fn default_args(self) -> BTreeMap<String, ArgSchema> {
		match self {
			ResourceAction::Index => BTreeMap::from([
				(
					"order".to_string(),
					ArgSchema::string().one_of(["asc", "desc"]).default_value("asc"),
				),
				(
					"orderby".to_string(),
					ArgSchema::string().default_value("title"),
				),
				("page".to_string(), ArgSchema::integer().default_value(1)),
				(
					"per_page".to_string(),
					ArgSchema::integer().default_value(10),
				),
			]),
			ResourceAction::Show => BTreeMap::from([(
				"fields".to_string(),
				ArgSchema::string()
					.description("A comma-separated list of the fields that should be included")
					.sanitize(comma_list),
			)]),
			_ => BTreeMap::new(),
		}
	}
}

/// Options narrowing and configuring a resource expansion.
///
/// # Examples
///
/// ```
/// use pressoir_routes::ResourceOptions;
///
/// let options = ResourceOptions::new()
///     .only(["index", "show"])
///     .id_string("{slug}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceOptions {
	pub(crate) only: Option<Vec<String>>,
	pub(crate) except: Vec<String>,
	pub(crate) id_string: Option<String>,
	pub(crate) route: RouteOptions,
}

impl ResourceOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the expansion to exactly these actions, in the given order.
	pub fn only(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.only = Some(actions.into_iter().map(Into::into).collect());
		self
	}

	/// Drops these actions from the catalog; unknown names are ignored.
	pub fn except(mut self, actions: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.except = actions.into_iter().map(Into::into).collect();
		self
	}

	/// Token substituted for `%s` in action suffixes (default `{id}`).
	pub fn id_string(mut self, token: impl Into<String>) -> Self {
		self.id_string = Some(token.into());
		self
	}

	/// Route options forwarded to every declared route.
	pub fn route_options(mut self, options: RouteOptions) -> Self {
		self.route = options;
		self
	}

	/// Resolves the effective ordered action list, validating every name
	/// before any route is declared.
	pub(crate) fn effective_actions(&self) -> Result<Vec<ResourceAction>, RouteError> {
		match &self.only {
			Some(only) => only
				.iter()
				.map(|name| {
					ResourceAction::from_name(name)
						.ok_or_else(|| RouteError::UnknownAction(name.clone()))
				})
				.collect(),
			None => Ok(ResourceAction::CATALOG
				.iter()
				.copied()
				.filter(|action| !self.except.iter().any(|skip| skip == action.name()))
				.collect()),
		}
	}

	pub(crate) fn id_token(&self) -> &str {
		self.id_string.as_deref().unwrap_or("{id}")
	}
}
