//! Legacy dotted paths and their native counterparts, sorted by legacy path.

use super::Column;

pub(super) static TABLE: &[(&str, &str, Column)] = &[
    ("angular_momentum.lx_200c_gas", "so.200_crit.angularmomentumgas", Column::Index(0)),
    ("angular_momentum.lx_200c_star", "so.200_crit.angularmomentumstars", Column::Index(0)),
    ("angular_momentum.lx_200m_gas", "so.200_mean.angularmomentumgas", Column::Index(0)),
    ("angular_momentum.lx_200m_star", "so.200_mean.angularmomentumstars", Column::Index(0)),
    ("angular_momentum.lx_bn98_gas", "so.bn98.angularmomentumgas", Column::Index(0)),
    ("angular_momentum.lx_bn98_star", "so.bn98.angularmomentumstars", Column::Index(0)),
    ("angular_momentum.lx_gas", "boundsubhaloproperties.angularmomentumgas", Column::Index(0)),
    ("angular_momentum.lx_star", "boundsubhaloproperties.angularmomentumstars", Column::Index(0)),
    ("angular_momentum.ly_200c_gas", "so.200_crit.angularmomentumgas", Column::Index(1)),
    ("angular_momentum.ly_200c_star", "so.200_crit.angularmomentumstars", Column::Index(1)),
    ("angular_momentum.ly_200m_gas", "so.200_mean.angularmomentumgas", Column::Index(1)),
    ("angular_momentum.ly_200m_star", "so.200_mean.angularmomentumstars", Column::Index(1)),
    ("angular_momentum.ly_bn98_gas", "so.bn98.angularmomentumgas", Column::Index(1)),
    ("angular_momentum.ly_bn98_star", "so.bn98.angularmomentumstars", Column::Index(1)),
    ("angular_momentum.ly_gas", "boundsubhaloproperties.angularmomentumgas", Column::Index(1)),
    ("angular_momentum.ly_star", "boundsubhaloproperties.angularmomentumstars", Column::Index(1)),
    ("angular_momentum.lz_200c_gas", "so.200_crit.angularmomentumgas", Column::Index(2)),
    ("angular_momentum.lz_200c_star", "so.200_crit.angularmomentumstars", Column::Index(2)),
    ("angular_momentum.lz_200m_gas", "so.200_mean.angularmomentumgas", Column::Index(2)),
    ("angular_momentum.lz_200m_star", "so.200_mean.angularmomentumstars", Column::Index(2)),
    ("angular_momentum.lz_bn98_gas", "so.bn98.angularmomentumgas", Column::Index(2)),
    ("angular_momentum.lz_bn98_star", "so.bn98.angularmomentumstars", Column::Index(2)),
    ("angular_momentum.lz_gas", "boundsubhaloproperties.angularmomentumgas", Column::Index(2)),
    ("angular_momentum.lz_star", "boundsubhaloproperties.angularmomentumstars", Column::Index(2)),
    ("apertures.mass_100_kpc", "exclusivesphere.100kpc.totalmass", Column::Whole),
    ("apertures.mass_10_kpc", "exclusivesphere.10kpc.totalmass", Column::Whole),
    ("apertures.mass_30_kpc", "exclusivesphere.30kpc.totalmass", Column::Whole),
    ("apertures.mass_50_kpc", "exclusivesphere.50kpc.totalmass", Column::Whole),
    ("apertures.mass_bh_100_kpc", "exclusivesphere.100kpc.blackholesdynamicalmass", Column::Whole),
    ("apertures.mass_bh_10_kpc", "exclusivesphere.10kpc.blackholesdynamicalmass", Column::Whole),
    ("apertures.mass_bh_30_kpc", "exclusivesphere.30kpc.blackholesdynamicalmass", Column::Whole),
    ("apertures.mass_bh_50_kpc", "exclusivesphere.50kpc.blackholesdynamicalmass", Column::Whole),
    ("apertures.mass_gas_100_kpc", "exclusivesphere.100kpc.gasmass", Column::Whole),
    ("apertures.mass_gas_10_kpc", "exclusivesphere.10kpc.gasmass", Column::Whole),
    ("apertures.mass_gas_30_kpc", "exclusivesphere.30kpc.gasmass", Column::Whole),
    ("apertures.mass_gas_50_kpc", "exclusivesphere.50kpc.gasmass", Column::Whole),
    ("apertures.mass_gas_sf_100_kpc", "exclusivesphere.100kpc.starforminggasmass", Column::Whole),
    ("apertures.mass_gas_sf_10_kpc", "exclusivesphere.10kpc.starforminggasmass", Column::Whole),
    ("apertures.mass_gas_sf_30_kpc", "exclusivesphere.30kpc.starforminggasmass", Column::Whole),
    ("apertures.mass_gas_sf_50_kpc", "exclusivesphere.50kpc.starforminggasmass", Column::Whole),
    ("apertures.mass_hight_100_kpc", "exclusivesphere.100kpc.totalmass", Column::Whole),
    ("apertures.mass_hight_10_kpc", "exclusivesphere.10kpc.totalmass", Column::Whole),
    ("apertures.mass_hight_30_kpc", "exclusivesphere.30kpc.totalmass", Column::Whole),
    ("apertures.mass_hight_50_kpc", "exclusivesphere.50kpc.totalmass", Column::Whole),
    ("apertures.mass_star_100_kpc", "exclusivesphere.100kpc.stellarmass", Column::Whole),
    ("apertures.mass_star_10_kpc", "exclusivesphere.10kpc.stellarmass", Column::Whole),
    ("apertures.mass_star_30_kpc", "exclusivesphere.30kpc.stellarmass", Column::Whole),
    ("apertures.mass_star_50_kpc", "exclusivesphere.50kpc.stellarmass", Column::Whole),
    (
        "apertures.npart_bh_100_kpc",
        "exclusivesphere.100kpc.numberofblackholeparticles",
        Column::Whole,
    ),
    (
        "apertures.npart_bh_10_kpc",
        "exclusivesphere.10kpc.numberofblackholeparticles",
        Column::Whole,
    ),
    (
        "apertures.npart_bh_30_kpc",
        "exclusivesphere.30kpc.numberofblackholeparticles",
        Column::Whole,
    ),
    (
        "apertures.npart_bh_50_kpc",
        "exclusivesphere.50kpc.numberofblackholeparticles",
        Column::Whole,
    ),
    ("apertures.npart_gas_100_kpc", "exclusivesphere.100kpc.numberofgasparticles", Column::Whole),
    ("apertures.npart_gas_10_kpc", "exclusivesphere.10kpc.numberofgasparticles", Column::Whole),
    ("apertures.npart_gas_30_kpc", "exclusivesphere.30kpc.numberofgasparticles", Column::Whole),
    ("apertures.npart_gas_50_kpc", "exclusivesphere.50kpc.numberofgasparticles", Column::Whole),
    ("apertures.npart_star_100_kpc", "exclusivesphere.100kpc.numberofstarparticles", Column::Whole),
    ("apertures.npart_star_10_kpc", "exclusivesphere.10kpc.numberofstarparticles", Column::Whole),
    ("apertures.npart_star_30_kpc", "exclusivesphere.30kpc.numberofstarparticles", Column::Whole),
    ("apertures.npart_star_50_kpc", "exclusivesphere.50kpc.numberofstarparticles", Column::Whole),
    ("apertures.rhalfmass_gas_100_kpc", "exclusivesphere.100kpc.halfmassradiusgas", Column::Whole),
    ("apertures.rhalfmass_gas_10_kpc", "exclusivesphere.10kpc.halfmassradiusgas", Column::Whole),
    ("apertures.rhalfmass_gas_30_kpc", "exclusivesphere.30kpc.halfmassradiusgas", Column::Whole),
    ("apertures.rhalfmass_gas_50_kpc", "exclusivesphere.50kpc.halfmassradiusgas", Column::Whole),
    (
        "apertures.rhalfmass_star_100_kpc",
        "exclusivesphere.100kpc.halfmassradiusstars",
        Column::Whole,
    ),
    ("apertures.rhalfmass_star_10_kpc", "exclusivesphere.10kpc.halfmassradiusstars", Column::Whole),
    ("apertures.rhalfmass_star_30_kpc", "exclusivesphere.30kpc.halfmassradiusstars", Column::Whole),
    ("apertures.rhalfmass_star_50_kpc", "exclusivesphere.50kpc.halfmassradiusstars", Column::Whole),
    ("apertures.sfr_gas_100_kpc", "exclusivesphere.100kpc.starformationrate", Column::Whole),
    ("apertures.sfr_gas_10_kpc", "exclusivesphere.10kpc.starformationrate", Column::Whole),
    ("apertures.sfr_gas_30_kpc", "exclusivesphere.30kpc.starformationrate", Column::Whole),
    ("apertures.sfr_gas_50_kpc", "exclusivesphere.50kpc.starformationrate", Column::Whole),
    ("apertures.zmet_gas_100_kpc", "exclusivesphere.100kpc.gasmassinmetals", Column::Whole),
    ("apertures.zmet_gas_10_kpc", "exclusivesphere.10kpc.gasmassinmetals", Column::Whole),
    ("apertures.zmet_gas_30_kpc", "exclusivesphere.30kpc.gasmassinmetals", Column::Whole),
    ("apertures.zmet_gas_50_kpc", "exclusivesphere.50kpc.gasmassinmetals", Column::Whole),
    (
        "apertures.zmet_gas_sf_100_kpc",
        "exclusivesphere.100kpc.starforminggasmassinmetals",
        Column::Whole,
    ),
    (
        "apertures.zmet_gas_sf_10_kpc",
        "exclusivesphere.10kpc.starforminggasmassinmetals",
        Column::Whole,
    ),
    (
        "apertures.zmet_gas_sf_30_kpc",
        "exclusivesphere.30kpc.starforminggasmassinmetals",
        Column::Whole,
    ),
    (
        "apertures.zmet_gas_sf_50_kpc",
        "exclusivesphere.50kpc.starforminggasmassinmetals",
        Column::Whole,
    ),
    ("apertures.zmet_star_100_kpc", "exclusivesphere.100kpc.stellarmassinmetals", Column::Whole),
    ("apertures.zmet_star_10_kpc", "exclusivesphere.10kpc.stellarmassinmetals", Column::Whole),
    ("apertures.zmet_star_30_kpc", "exclusivesphere.30kpc.stellarmassinmetals", Column::Whole),
    ("apertures.zmet_star_50_kpc", "exclusivesphere.50kpc.stellarmassinmetals", Column::Whole),
    ("black_hole_masses.max", "boundsubhaloproperties.mostmassiveblackholemass", Column::Whole),
    ("ids.hosthaloid", "vr.hosthaloid", Column::Whole),
    ("masses.mass_200crit", "so.200_crit.totalmass", Column::Whole),
    ("masses.mass_200crit_gas", "so.200_crit.gasmass", Column::Whole),
    ("masses.mass_200crit_star", "so.200_crit.stellarmass", Column::Whole),
    ("masses.mass_200mean", "so.200_mean.totalmass", Column::Whole),
    ("masses.mass_200mean_gas", "so.200_mean.gasmass", Column::Whole),
    ("masses.mass_200mean_star", "so.200_mean.stellarmass", Column::Whole),
    ("masses.mass_bh", "boundsubhaloproperties.blackholesdynamicalmass", Column::Whole),
    ("masses.mass_bn98", "so.bn98.totalmass", Column::Whole),
    ("masses.mass_bn98_gas", "so.bn98.gasmass", Column::Whole),
    ("masses.mass_bn98_star", "so.bn98.stellarmass", Column::Whole),
    ("masses.mass_fof", "fofsubhaloproperties.totalmass", Column::Whole),
    ("masses.mass_gas", "boundsubhaloproperties.gasmass", Column::Whole),
    ("masses.mass_star", "boundsubhaloproperties.stellarmass", Column::Whole),
    ("masses.mass_tot", "boundsubhaloproperties.totalmass", Column::Whole),
    ("metallicity.zmet_gas", "boundsubhaloproperties.gasmassinmetals", Column::Whole),
    ("metallicity.zmet_star", "boundsubhaloproperties.stellarmassinmetals", Column::Whole),
    ("number.bh", "boundsubhaloproperties.numberofblackholeparticles", Column::Whole),
    ("number.gas", "boundsubhaloproperties.numberofgasparticles", Column::Whole),
    ("number.star", "boundsubhaloproperties.numberofstarparticles", Column::Whole),
    ("positions.xc", "boundsubhaloproperties.centreofmass", Column::Index(0)),
    ("positions.xcmbp", "vr.centreofpotential", Column::Index(0)),
    ("positions.xcminpot", "vr.centreofpotential", Column::Index(0)),
    ("positions.yc", "boundsubhaloproperties.centreofmass", Column::Index(1)),
    ("positions.ycmbp", "vr.centreofpotential", Column::Index(1)),
    ("positions.ycminpot", "vr.centreofpotential", Column::Index(1)),
    ("positions.zc", "boundsubhaloproperties.centreofmass", Column::Index(2)),
    ("positions.zcmbp", "vr.centreofpotential", Column::Index(2)),
    ("positions.zcminpot", "vr.centreofpotential", Column::Index(2)),
    (
        "projected_apertures.projected_1_mass_100_kpc",
        "projectedaperture.100kpc.projx.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_10_kpc",
        "projectedaperture.10kpc.projx.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_30_kpc",
        "projectedaperture.30kpc.projx.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_50_kpc",
        "projectedaperture.50kpc.projx.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_gas_100_kpc",
        "projectedaperture.100kpc.projx.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_gas_10_kpc",
        "projectedaperture.10kpc.projx.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_gas_30_kpc",
        "projectedaperture.30kpc.projx.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_gas_50_kpc",
        "projectedaperture.50kpc.projx.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_star_100_kpc",
        "projectedaperture.100kpc.projx.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_star_10_kpc",
        "projectedaperture.10kpc.projx.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_star_30_kpc",
        "projectedaperture.30kpc.projx.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_mass_star_50_kpc",
        "projectedaperture.50kpc.projx.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_gas_100_kpc",
        "projectedaperture.100kpc.projx.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_gas_10_kpc",
        "projectedaperture.10kpc.projx.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_gas_30_kpc",
        "projectedaperture.30kpc.projx.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_gas_50_kpc",
        "projectedaperture.50kpc.projx.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_star_100_kpc",
        "projectedaperture.100kpc.projx.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_star_10_kpc",
        "projectedaperture.10kpc.projx.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_star_30_kpc",
        "projectedaperture.30kpc.projx.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_rhalfmass_star_50_kpc",
        "projectedaperture.50kpc.projx.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_sfr_gas_100_kpc",
        "projectedaperture.100kpc.projx.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_sfr_gas_10_kpc",
        "projectedaperture.10kpc.projx.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_sfr_gas_30_kpc",
        "projectedaperture.30kpc.projx.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_1_sfr_gas_50_kpc",
        "projectedaperture.50kpc.projx.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_100_kpc",
        "projectedaperture.100kpc.projy.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_10_kpc",
        "projectedaperture.10kpc.projy.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_30_kpc",
        "projectedaperture.30kpc.projy.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_50_kpc",
        "projectedaperture.50kpc.projy.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_gas_100_kpc",
        "projectedaperture.100kpc.projy.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_gas_10_kpc",
        "projectedaperture.10kpc.projy.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_gas_30_kpc",
        "projectedaperture.30kpc.projy.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_gas_50_kpc",
        "projectedaperture.50kpc.projy.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_star_100_kpc",
        "projectedaperture.100kpc.projy.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_star_10_kpc",
        "projectedaperture.10kpc.projy.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_star_30_kpc",
        "projectedaperture.30kpc.projy.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_mass_star_50_kpc",
        "projectedaperture.50kpc.projy.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_gas_100_kpc",
        "projectedaperture.100kpc.projy.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_gas_10_kpc",
        "projectedaperture.10kpc.projy.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_gas_30_kpc",
        "projectedaperture.30kpc.projy.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_gas_50_kpc",
        "projectedaperture.50kpc.projy.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_star_100_kpc",
        "projectedaperture.100kpc.projy.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_star_10_kpc",
        "projectedaperture.10kpc.projy.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_star_30_kpc",
        "projectedaperture.30kpc.projy.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_rhalfmass_star_50_kpc",
        "projectedaperture.50kpc.projy.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_sfr_gas_100_kpc",
        "projectedaperture.100kpc.projy.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_sfr_gas_10_kpc",
        "projectedaperture.10kpc.projy.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_sfr_gas_30_kpc",
        "projectedaperture.30kpc.projy.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_2_sfr_gas_50_kpc",
        "projectedaperture.50kpc.projy.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_100_kpc",
        "projectedaperture.100kpc.projz.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_10_kpc",
        "projectedaperture.10kpc.projz.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_30_kpc",
        "projectedaperture.30kpc.projz.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_50_kpc",
        "projectedaperture.50kpc.projz.totalmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_gas_100_kpc",
        "projectedaperture.100kpc.projz.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_gas_10_kpc",
        "projectedaperture.10kpc.projz.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_gas_30_kpc",
        "projectedaperture.30kpc.projz.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_gas_50_kpc",
        "projectedaperture.50kpc.projz.gasmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_star_100_kpc",
        "projectedaperture.100kpc.projz.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_star_10_kpc",
        "projectedaperture.10kpc.projz.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_star_30_kpc",
        "projectedaperture.30kpc.projz.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_mass_star_50_kpc",
        "projectedaperture.50kpc.projz.stellarmass",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_gas_100_kpc",
        "projectedaperture.100kpc.projz.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_gas_10_kpc",
        "projectedaperture.10kpc.projz.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_gas_30_kpc",
        "projectedaperture.30kpc.projz.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_gas_50_kpc",
        "projectedaperture.50kpc.projz.halfmassradiusgas",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_star_100_kpc",
        "projectedaperture.100kpc.projz.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_star_10_kpc",
        "projectedaperture.10kpc.projz.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_star_30_kpc",
        "projectedaperture.30kpc.projz.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_rhalfmass_star_50_kpc",
        "projectedaperture.50kpc.projz.halfmassradiusstars",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_sfr_gas_100_kpc",
        "projectedaperture.100kpc.projz.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_sfr_gas_10_kpc",
        "projectedaperture.10kpc.projz.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_sfr_gas_30_kpc",
        "projectedaperture.30kpc.projz.starformationrate",
        Column::Whole,
    ),
    (
        "projected_apertures.projected_3_sfr_gas_50_kpc",
        "projectedaperture.50kpc.projz.starformationrate",
        Column::Whole,
    ),
    ("radii.r_200crit", "so.200_crit.soradius", Column::Whole),
    ("radii.r_200mean", "so.200_mean.soradius", Column::Whole),
    ("radii.r_bn98", "so.bn98.soradius", Column::Whole),
    ("radii.r_halfmass", "boundsubhaloproperties.halfmassradiustotal", Column::Whole),
    ("radii.r_halfmass_gas", "boundsubhaloproperties.halfmassradiusgas", Column::Whole),
    ("radii.r_halfmass_star", "boundsubhaloproperties.halfmassradiusstars", Column::Whole),
    (
        "spherical_overdensities.lx_gas_1000_rhocrit",
        "so.1000_crit.angularmomentumgas",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_gas_100_rhocrit",
        "so.100_crit.angularmomentumgas",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_gas_200_rhocrit",
        "so.200_crit.angularmomentumgas",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_gas_2500_rhocrit",
        "so.2500_crit.angularmomentumgas",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_gas_500_rhocrit",
        "so.500_crit.angularmomentumgas",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_star_1000_rhocrit",
        "so.1000_crit.angularmomentumstars",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_star_100_rhocrit",
        "so.100_crit.angularmomentumstars",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_star_200_rhocrit",
        "so.200_crit.angularmomentumstars",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_star_2500_rhocrit",
        "so.2500_crit.angularmomentumstars",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.lx_star_500_rhocrit",
        "so.500_crit.angularmomentumstars",
        Column::Index(0),
    ),
    (
        "spherical_overdensities.ly_gas_1000_rhocrit",
        "so.1000_crit.angularmomentumgas",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_gas_100_rhocrit",
        "so.100_crit.angularmomentumgas",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_gas_200_rhocrit",
        "so.200_crit.angularmomentumgas",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_gas_2500_rhocrit",
        "so.2500_crit.angularmomentumgas",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_gas_500_rhocrit",
        "so.500_crit.angularmomentumgas",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_star_1000_rhocrit",
        "so.1000_crit.angularmomentumstars",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_star_100_rhocrit",
        "so.100_crit.angularmomentumstars",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_star_200_rhocrit",
        "so.200_crit.angularmomentumstars",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_star_2500_rhocrit",
        "so.2500_crit.angularmomentumstars",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.ly_star_500_rhocrit",
        "so.500_crit.angularmomentumstars",
        Column::Index(1),
    ),
    (
        "spherical_overdensities.lz_gas_1000_rhocrit",
        "so.1000_crit.angularmomentumgas",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_gas_100_rhocrit",
        "so.100_crit.angularmomentumgas",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_gas_200_rhocrit",
        "so.200_crit.angularmomentumgas",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_gas_2500_rhocrit",
        "so.2500_crit.angularmomentumgas",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_gas_500_rhocrit",
        "so.500_crit.angularmomentumgas",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_star_1000_rhocrit",
        "so.1000_crit.angularmomentumstars",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_star_100_rhocrit",
        "so.100_crit.angularmomentumstars",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_star_200_rhocrit",
        "so.200_crit.angularmomentumstars",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_star_2500_rhocrit",
        "so.2500_crit.angularmomentumstars",
        Column::Index(2),
    ),
    (
        "spherical_overdensities.lz_star_500_rhocrit",
        "so.500_crit.angularmomentumstars",
        Column::Index(2),
    ),
    ("spherical_overdensities.mass_1000_rhocrit", "so.1000_crit.totalmass", Column::Whole),
    ("spherical_overdensities.mass_100_rhocrit", "so.100_crit.totalmass", Column::Whole),
    ("spherical_overdensities.mass_200_rhocrit", "so.200_crit.totalmass", Column::Whole),
    ("spherical_overdensities.mass_2500_rhocrit", "so.2500_crit.totalmass", Column::Whole),
    ("spherical_overdensities.mass_500_rhocrit", "so.500_crit.totalmass", Column::Whole),
    ("spherical_overdensities.mass_gas_1000_rhocrit", "so.1000_crit.gasmass", Column::Whole),
    ("spherical_overdensities.mass_gas_100_rhocrit", "so.100_crit.gasmass", Column::Whole),
    ("spherical_overdensities.mass_gas_200_rhocrit", "so.200_crit.gasmass", Column::Whole),
    ("spherical_overdensities.mass_gas_2500_rhocrit", "so.2500_crit.gasmass", Column::Whole),
    ("spherical_overdensities.mass_gas_500_rhocrit", "so.500_crit.gasmass", Column::Whole),
    ("spherical_overdensities.mass_star_1000_rhocrit", "so.1000_crit.stellarmass", Column::Whole),
    ("spherical_overdensities.mass_star_100_rhocrit", "so.100_crit.stellarmass", Column::Whole),
    ("spherical_overdensities.mass_star_200_rhocrit", "so.200_crit.stellarmass", Column::Whole),
    ("spherical_overdensities.mass_star_2500_rhocrit", "so.2500_crit.stellarmass", Column::Whole),
    ("spherical_overdensities.mass_star_500_rhocrit", "so.500_crit.stellarmass", Column::Whole),
    ("spherical_overdensities.r_1000_rhocrit", "so.1000_crit.soradius", Column::Whole),
    ("spherical_overdensities.r_100_rhocrit", "so.100_crit.soradius", Column::Whole),
    ("spherical_overdensities.r_200_rhocrit", "so.200_crit.soradius", Column::Whole),
    ("spherical_overdensities.r_2500_rhocrit", "so.2500_crit.soradius", Column::Whole),
    ("spherical_overdensities.r_500_rhocrit", "so.500_crit.soradius", Column::Whole),
    ("star_formation_rate.sfr_gas", "boundsubhaloproperties.starformationrate", Column::Whole),
    (
        "stellar_luminosities.H_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(7),
    ),
    (
        "stellar_luminosities.H_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(7),
    ),
    (
        "stellar_luminosities.H_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(7),
    ),
    (
        "stellar_luminosities.H_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(7),
    ),
    (
        "stellar_luminosities.J_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(6),
    ),
    (
        "stellar_luminosities.J_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(6),
    ),
    (
        "stellar_luminosities.J_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(6),
    ),
    (
        "stellar_luminosities.J_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(6),
    ),
    (
        "stellar_luminosities.K_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(8),
    ),
    (
        "stellar_luminosities.K_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(8),
    ),
    (
        "stellar_luminosities.K_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(8),
    ),
    (
        "stellar_luminosities.K_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(8),
    ),
    (
        "stellar_luminosities.Y_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(5),
    ),
    (
        "stellar_luminosities.Y_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(5),
    ),
    (
        "stellar_luminosities.Y_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(5),
    ),
    (
        "stellar_luminosities.Y_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(5),
    ),
    (
        "stellar_luminosities.g_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(1),
    ),
    (
        "stellar_luminosities.g_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(1),
    ),
    (
        "stellar_luminosities.g_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(1),
    ),
    (
        "stellar_luminosities.g_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(1),
    ),
    (
        "stellar_luminosities.i_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(3),
    ),
    (
        "stellar_luminosities.i_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(3),
    ),
    (
        "stellar_luminosities.i_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(3),
    ),
    (
        "stellar_luminosities.i_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(3),
    ),
    (
        "stellar_luminosities.r_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(2),
    ),
    (
        "stellar_luminosities.r_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(2),
    ),
    (
        "stellar_luminosities.r_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(2),
    ),
    (
        "stellar_luminosities.r_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(2),
    ),
    (
        "stellar_luminosities.u_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(0),
    ),
    (
        "stellar_luminosities.u_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(0),
    ),
    (
        "stellar_luminosities.u_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(0),
    ),
    (
        "stellar_luminosities.u_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(0),
    ),
    (
        "stellar_luminosities.z_luminosity_100_kpc",
        "exclusivesphere.100kpc.stellarluminosity",
        Column::Index(4),
    ),
    (
        "stellar_luminosities.z_luminosity_10_kpc",
        "exclusivesphere.10kpc.stellarluminosity",
        Column::Index(4),
    ),
    (
        "stellar_luminosities.z_luminosity_30_kpc",
        "exclusivesphere.30kpc.stellarluminosity",
        Column::Index(4),
    ),
    (
        "stellar_luminosities.z_luminosity_50_kpc",
        "exclusivesphere.50kpc.stellarluminosity",
        Column::Index(4),
    ),
    ("structure_type.structuretype", "vr.structuretype", Column::Whole),
    ("temperature.t_gas", "boundsubhaloproperties.gastemperature", Column::Whole),
    (
        "temperature.t_gas_hight_incl",
        "boundsubhaloproperties.gastemperaturewithoutcoolgas",
        Column::Whole,
    ),
    (
        "veldisp.veldisp_xx_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(0),
    ),
    (
        "veldisp.veldisp_xx_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(0),
    ),
    (
        "veldisp.veldisp_xy_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(3),
    ),
    (
        "veldisp.veldisp_xy_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(3),
    ),
    (
        "veldisp.veldisp_xz_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(4),
    ),
    (
        "veldisp.veldisp_xz_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(4),
    ),
    (
        "veldisp.veldisp_yx_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(3),
    ),
    (
        "veldisp.veldisp_yx_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(3),
    ),
    (
        "veldisp.veldisp_yy_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(1),
    ),
    (
        "veldisp.veldisp_yy_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(1),
    ),
    (
        "veldisp.veldisp_yz_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(5),
    ),
    (
        "veldisp.veldisp_yz_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(5),
    ),
    (
        "veldisp.veldisp_zx_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(4),
    ),
    (
        "veldisp.veldisp_zx_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(4),
    ),
    (
        "veldisp.veldisp_zy_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(5),
    ),
    (
        "veldisp.veldisp_zy_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(5),
    ),
    (
        "veldisp.veldisp_zz_gas",
        "boundsubhaloproperties.gasvelocitydispersionmatrix",
        Column::Index(2),
    ),
    (
        "veldisp.veldisp_zz_star",
        "boundsubhaloproperties.stellarvelocitydispersionmatrix",
        Column::Index(2),
    ),
    ("velocities.vmax", "boundsubhaloproperties.maximumcircularvelocity", Column::Whole),
    ("velocities.vxc", "boundsubhaloproperties.centreofmassvelocity", Column::Index(0)),
    ("velocities.vyc", "boundsubhaloproperties.centreofmassvelocity", Column::Index(1)),
    ("velocities.vzc", "boundsubhaloproperties.centreofmassvelocity", Column::Index(2)),
];
