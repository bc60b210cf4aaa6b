/// Catalog entry naming one dataset file (a path or bare filename).
/// Example: `/badc/cmip6/.../ua_day_CESM2_historical_r10i1p1f1_gn_19500101-19991231.nc`
pub type FileIdentifier = String;
/// Identifier with its date-range substring removed; equality over these
/// defines dataset families.
/// Example: `ua_day_CESM2_historical_r10i1p1f1_gn_.nc`
pub type FamilyKey = String;
/// Human-readable label derived from a group's first member.
/// Example: `ua_day_CESM2_historical_r10i1p1f1_gn`
pub type GroupLabel = String;
/// Textual date in the configured catalog format.
/// Example: `19500101`
pub type DateText = String;
