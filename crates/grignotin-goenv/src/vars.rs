//! Names of the variables reported by `go env`.

pub const AR: &str = "AR";
pub const CC: &str = "CC";
pub const CGO_ENABLED: &str = "CGO_ENABLED";
pub const CXX: &str = "CXX";
pub const GCCGO: &str = "GCCGO";
pub const GO111MODULE: &str = "GO111MODULE";
pub const GOARCH: &str = "GOARCH";
pub const GOBIN: &str = "GOBIN";
pub const GOCACHE: &str = "GOCACHE";
pub const GOENV: &str = "GOENV";
pub const GOEXE: &str = "GOEXE";
pub const GOEXPERIMENT: &str = "GOEXPERIMENT";
pub const GOFLAGS: &str = "GOFLAGS";
pub const GOHOSTARCH: &str = "GOHOSTARCH";
pub const GOHOSTOS: &str = "GOHOSTOS";
pub const GOINSECURE: &str = "GOINSECURE";
pub const GOMOD: &str = "GOMOD";
pub const GOMODCACHE: &str = "GOMODCACHE";
pub const GONOPROXY: &str = "GONOPROXY";
pub const GONOSUMDB: &str = "GONOSUMDB";
pub const GOOS: &str = "GOOS";
pub const GOPATH: &str = "GOPATH";
pub const GOPRIVATE: &str = "GOPRIVATE";
pub const GOPROXY: &str = "GOPROXY";
pub const GOROOT: &str = "GOROOT";
pub const GOSUMDB: &str = "GOSUMDB";
pub const GOTELEMETRY: &str = "GOTELEMETRY";
pub const GOTMPDIR: &str = "GOTMPDIR";
pub const GOTOOLCHAIN: &str = "GOTOOLCHAIN";
pub const GOTOOLDIR: &str = "GOTOOLDIR";
pub const GOVCS: &str = "GOVCS";
pub const GOVERSION: &str = "GOVERSION";
pub const GOWORK: &str = "GOWORK";
