// Endpoint catalogue
//
// One module per API domain, each adding inherent methods to
// `MachineClient`. Every entry fixes the HTTP method, the path template
// under `/api/{version}/`, and the typed request/response shapes -- a
// pure mapping, no logic. Error normalization lives in the request
// helpers on `MachineClient`, never here.

pub mod actions;
pub mod history;
pub mod machine;
pub mod notifications;
pub mod profiles;
pub mod settings;
pub mod sounds;
pub mod wifi;
